//! Animation reconstruction from the flat frame table.
//!
//! For every layer × tag pair the editor's export implies an animation clip,
//! but the relation is only encoded in frame names. This module rebuilds each
//! clip by synthesizing the frame key for every index in the tag's range and
//! looking it up in the frame table.
//!
//! Reconstruction is all-or-nothing per clip: a single missing index drops
//! the whole `(layer, tag)` entry from the output. A truncated clip would
//! silently change playback length downstream, which is worse than no clip.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use spritebake_export::{frame_key, Direction, FrameTag, PixelRect, SheetExport, SheetSize};

/// A texture-space rectangle with each component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// One frame of a reconstructed clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Where to sample the spritesheet.
    pub uv: UvRect,
    /// Display duration in milliseconds.
    pub delay: u32,
}

/// A fully reconstructed animation clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Frames in ascending tag-index order; always the full tag length.
    pub frames: Vec<AnimationFrame>,
    pub direction: Direction,
}

/// Reconstructed clips keyed by layer name, then animation name.
///
/// Ordered maps keep serialized output deterministic. Every source layer has
/// an entry, even when none of its clips survived reconstruction.
pub type SpriteMap = BTreeMap<String, BTreeMap<String, Animation>>;

/// Non-fatal conditions encountered while rebuilding the sprite map.
///
/// These never abort a conversion; the caller decides how loudly to report
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConvertWarning {
    /// A tag with `to < from` describes no frames; it is skipped for every
    /// layer.
    EmptyTag { tag: String, from: u32, to: u32 },
    /// A frame key had no entry in the frame table; the clip was dropped for
    /// this layer.
    MissingFrame {
        layer: String,
        animation: String,
        index: u32,
    },
}

impl ConvertWarning {
    /// Stable warning code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            ConvertWarning::EmptyTag { .. } => "W001",
            ConvertWarning::MissingFrame { .. } => "W002",
        }
    }
}

impl std::fmt::Display for ConvertWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertWarning::EmptyTag { tag, from, to } => {
                write!(f, "tag '{}' has empty range {}..{}, skipped", tag, from, to)
            }
            ConvertWarning::MissingFrame {
                layer,
                animation,
                index,
            } => write!(
                f,
                "frame '{}' not found, dropped animation '{}' for layer '{}'",
                frame_key(layer, animation, *index),
                animation,
                layer
            ),
        }
    }
}

/// Rebuilds the sprite map for a validated export.
///
/// Iterates layers then tags in source order, which also fixes the order of
/// any warnings produced.
pub fn build_sprite_map(export: &SheetExport) -> (SpriteMap, Vec<ConvertWarning>) {
    let mut warnings = Vec::new();

    // Weed out malformed tags once, not per layer.
    let mut clips: Vec<(&FrameTag, u32)> = Vec::with_capacity(export.meta.frame_tags.len());
    for tag in &export.meta.frame_tags {
        match tag.frame_count() {
            Some(length) => clips.push((tag, length)),
            None => warnings.push(ConvertWarning::EmptyTag {
                tag: tag.name.clone(),
                from: tag.from,
                to: tag.to,
            }),
        }
    }

    let mut sprites = SpriteMap::new();
    for layer in &export.meta.layers {
        // The layer entry exists even if every clip below fails.
        let animations = sprites.entry(layer.name.clone()).or_default();
        for &(tag, length) in &clips {
            match reconstruct_clip(export, &layer.name, tag, length) {
                Ok(frames) => {
                    animations.insert(
                        tag.name.clone(),
                        Animation {
                            frames,
                            direction: tag.direction,
                        },
                    );
                }
                Err(index) => warnings.push(ConvertWarning::MissingFrame {
                    layer: layer.name.clone(),
                    animation: tag.name.clone(),
                    index,
                }),
            }
        }
    }

    (sprites, warnings)
}

/// Rebuilds one clip, or returns the first missing frame index.
fn reconstruct_clip(
    export: &SheetExport,
    layer: &str,
    tag: &FrameTag,
    length: u32,
) -> Result<Vec<AnimationFrame>, u32> {
    // `length` comes straight from unverified tag data; don't reserve more
    // than a plausible clip before any lookup has succeeded.
    let mut frames = Vec::with_capacity(length.min(256) as usize);
    for i in 0..length {
        let frame = export
            .frames
            .get(&frame_key(layer, &tag.name, i))
            .ok_or(i)?;
        frames.push(AnimationFrame {
            uv: normalize(frame.frame, export.meta.size),
            delay: frame.duration,
        });
    }
    Ok(frames)
}

/// Converts a pixel rect to texture space by dividing through the canvas.
///
/// The canvas is guaranteed positive by export validation.
fn normalize(rect: PixelRect, canvas: SheetSize) -> UvRect {
    let w = f64::from(canvas.w);
    let h = f64::from(canvas.h);
    UvRect {
        x: f64::from(rect.x) / w,
        y: f64::from(rect.y) / h,
        w: f64::from(rect.w) / w,
        h: f64::from(rect.h) / h,
    }
}
