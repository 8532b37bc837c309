//! Sprite Conversion Backend
//!
//! Turns a parsed sheet export (see `spritebake-export`) into an engine-ready
//! sprite descriptor: per-layer, per-animation sequences of normalized UV
//! rects and frame delays, with the packed spritesheet embedded as a
//! self-contained `data:` URI.
//!
//! The two halves of the conversion are independent and meet only in
//! [`convert`]:
//!
//! - [`sprite`]: rebuilds animation clips from the flat frame table via the
//!   frame-key convention and normalizes pixel rects to texture space.
//! - [`embed`]: decodes the referenced sheet image and re-encodes it as a
//!   base64 PNG data URI.

pub mod convert;
pub mod embed;
pub mod sprite;

pub use convert::{convert, Conversion, ConvertError, DocMeta, SpriteDoc, TOOL_ID};
pub use embed::{embed_spritesheet, EmbedError, DATA_URI_PREFIX};
pub use sprite::{
    build_sprite_map, Animation, AnimationFrame, ConvertWarning, SpriteMap, UvRect,
};
