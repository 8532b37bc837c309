//! Structural validation of parsed exports.
//!
//! Deserialization already rejects documents with missing or mistyped fields;
//! this is the boundary for constraints serde cannot check. Downstream code
//! (the converter) assumes a validated export.

use crate::error::ExportError;
use crate::export::SheetExport;

/// Validates an export beyond its JSON shape.
///
/// The one constraint enforced here is a positive canvas: frame rects are
/// normalized by dividing through the canvas dimensions, so a zero width or
/// height is malformed input, not a divide-by-zero waiting downstream.
pub fn validate_export(export: &SheetExport) -> Result<(), ExportError> {
    let size = export.meta.size;
    if size.w == 0 || size.h == 0 {
        return Err(ExportError::ZeroCanvas {
            w: size.w,
            h: size.h,
        });
    }
    Ok(())
}
