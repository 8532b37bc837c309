//! Spritesheet embedding as a `data:` URI.
//!
//! Decodes the sheet image referenced by an export and re-encodes it as a
//! base64 PNG payload with a media-type prefix, so the output descriptor has
//! no external file dependency. Encoder settings are fixed so identical
//! pixels always produce identical payloads.
//!
//! Every call owns its decode buffers; there is no shared decoding context to
//! guard, and calls may run concurrently.

use std::path::Path;

use base64::Engine;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

/// Media-type prefix of an embedded spritesheet payload.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Errors from loading or re-encoding a spritesheet image.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The referenced image could not be read or decoded.
    #[error("failed to load spritesheet image: {0}")]
    Image(#[from] image::ImageError),

    /// PNG re-encoding failed.
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// Loads the image at `path` and returns it as a PNG data URI.
///
/// Any decodable raster input is accepted; the payload is always RGBA PNG.
pub fn embed_spritesheet(path: &Path) -> Result<String, EmbedError> {
    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut png_data = Vec::new();
    {
        let mut encoder = Encoder::new(&mut png_data, width, height);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        encoder.set_compression(Compression::Default);
        encoder.set_filter(FilterType::NoFilter);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgba.as_raw())?;
    }

    let mut uri = String::from(DATA_URI_PREFIX);
    base64::engine::general_purpose::STANDARD.encode_string(&png_data, &mut uri);
    Ok(uri)
}
