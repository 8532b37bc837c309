//! Error types for export document validation.

use thiserror::Error;

/// Errors produced by structural validation of a sheet export.
///
/// Shape errors (missing `meta`, missing `layers`, a non-numeric size field)
/// are rejected earlier by serde during deserialization; this enum covers the
/// constraints the JSON shape alone cannot express.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Canvas dimensions must be positive; UV normalization divides by them.
    #[error("canvas size must be positive, got {w}x{h}")]
    ZeroCanvas {
        /// Declared canvas width in pixels.
        w: u32,
        /// Declared canvas height in pixels.
        h: u32,
    },
}
