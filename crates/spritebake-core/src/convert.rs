//! Top-level export-to-descriptor conversion.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spritebake_export::{validate_export, ExportError, SheetExport};
use thiserror::Error;

use crate::embed::{embed_spritesheet, EmbedError};
use crate::sprite::{build_sprite_map, ConvertWarning, SpriteMap};

/// Tool identifier stamped into every output descriptor's `meta.app`.
pub const TOOL_ID: &str = concat!("spritebake-", env!("CARGO_PKG_VERSION"));

/// Errors from converting one export.
///
/// Warnings (missing frames, empty tags) are not errors; they ride along in
/// [`Conversion::warnings`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The export failed structural validation.
    #[error("invalid export: {0}")]
    Export(#[from] ExportError),

    /// The referenced spritesheet image could not be embedded.
    #[error(transparent)]
    Embed(#[from] EmbedError),
}

/// The engine-ready sprite descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteDoc {
    /// Reconstructed clips, layer name → animation name → clip.
    pub sprites: SpriteMap,
    /// The packed sheet as a PNG data URI.
    pub spritesheet: String,
    pub meta: DocMeta,
}

/// Provenance metadata of an output descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    /// Identifier of this tool (see [`TOOL_ID`]).
    pub app: String,
    /// The source editor's `meta.app` string.
    pub origin: String,
    /// The source editor's version string.
    pub version: String,
}

/// Result of one conversion: the descriptor plus any warnings.
#[derive(Debug)]
pub struct Conversion {
    pub doc: SpriteDoc,
    pub warnings: Vec<ConvertWarning>,
}

/// Converts a parsed export into a sprite descriptor.
///
/// `source_dir` is the directory of the export file; the sheet image path in
/// `meta.image` is resolved against it with native path semantics. Sprite
/// reconstruction and image embedding have no data dependency on each other;
/// they are simply run in sequence here.
pub fn convert(export: &SheetExport, source_dir: &Path) -> Result<Conversion, ConvertError> {
    validate_export(export)?;

    let (sprites, warnings) = build_sprite_map(export);
    let spritesheet = embed_spritesheet(&source_dir.join(&export.meta.image))?;

    Ok(Conversion {
        doc: SpriteDoc {
            sprites,
            spritesheet,
            meta: DocMeta {
                app: TOOL_ID.to_string(),
                origin: export.meta.app.clone(),
                version: export.meta.version.clone(),
            },
        },
        warnings,
    })
}
