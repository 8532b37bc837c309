//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag so other tools can consume batch
//! results without scraping colored terminal output.

use serde::{Deserialize, Serialize};
use spritebake_core::ConvertWarning;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Input file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Input file is not valid JSON or not a sheet export
    pub const PARSE: &str = "CLI_002";
    /// Export failed structural validation
    pub const INVALID_EXPORT: &str = "CLI_003";
    /// Spritesheet image could not be loaded or re-encoded
    pub const IMAGE_EMBED: &str = "CLI_004";
    /// Output descriptor could not be written
    pub const FILE_WRITE: &str = "CLI_005";
    /// Output descriptor could not be serialized
    pub const SERIALIZE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonError {
    /// Stable error code (e.g. "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWarning {
    /// Stable warning code (e.g. "W002")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl From<&ConvertWarning> for JsonWarning {
    fn from(warning: &ConvertWarning) -> Self {
        Self {
            code: warning.code().to_string(),
            message: warning.to_string(),
        }
    }
}
