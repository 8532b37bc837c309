//! Aseprite Sheet-Export Document Model
//!
//! This crate provides types, deserialization, and structural validation for
//! the JSON documents Aseprite writes when exporting a packed spritesheet
//! ("Export Sprite Sheet" with the hash output format). A document consists
//! of a flat frame table keyed by a naming convention plus metadata: canvas
//! size, the packed image reference, the ordered layer list, and the ordered
//! animation tag list.
//!
//! # Frame-key convention
//!
//! Frames are not related to layers or tags structurally. The editor encodes
//! the relation in the frame name: `"{layer} {tag} {index}"` with a zero-based
//! index inside the tag's range. [`frame_key`] is the single place that
//! convention lives; consumers look keys up in [`SheetExport::frames`].
//!
//! # Example
//!
//! ```
//! use spritebake_export::{frame_key, validate_export, SheetExport};
//!
//! let json = r#"{
//!     "frames": {
//!         "cat static 0": {
//!             "frame": { "x": 0, "y": 0, "w": 50, "h": 50 },
//!             "duration": 100
//!         }
//!     },
//!     "meta": {
//!         "app": "http://www.aseprite.org/",
//!         "version": "1.2.21-dev",
//!         "image": "cat.png",
//!         "size": { "w": 100, "h": 100 },
//!         "layers": [{ "name": "cat" }],
//!         "frameTags": [
//!             { "name": "static", "from": 0, "to": 0, "direction": "forward" }
//!         ]
//!     }
//! }"#;
//!
//! let export: SheetExport = serde_json::from_str(json).unwrap();
//! validate_export(&export).unwrap();
//! assert!(export.frames.contains_key(&frame_key("cat", "static", 0)));
//! ```

pub mod error;
pub mod export;
pub mod validation;

pub use error::ExportError;
pub use export::{
    frame_key, Direction, ExportFrame, ExportMeta, FrameTag, Layer, PixelRect, SheetExport,
    SheetSize,
};
pub use validation::validate_export;
