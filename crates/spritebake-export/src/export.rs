//! Sheet export document types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Builds the frame-table key for one animation frame.
///
/// Aseprite names exported frames `"{layer} {tag} {index}"` where `index` is
/// zero-based within the tag's range. Every lookup into
/// [`SheetExport::frames`] goes through this function so the convention has
/// exactly one home.
pub fn frame_key(layer: &str, animation: &str, index: u32) -> String {
    format!("{} {} {}", layer, animation, index)
}

/// A complete sheet-export document as written by the editor.
///
/// Read-only input: the converter never mutates it.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetExport {
    /// Flat frame table, keyed by the [`frame_key`] convention.
    pub frames: HashMap<String, ExportFrame>,
    /// Export metadata: canvas, image reference, layers, and tags.
    pub meta: ExportMeta,
}

/// One entry in the frame table.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportFrame {
    /// Pixel-space bounding box of the frame within the packed sheet.
    pub frame: PixelRect,
    /// Frame display duration in milliseconds.
    pub duration: u32,
}

/// A pixel-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Export metadata block.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportMeta {
    /// Source application identifier (e.g. `"http://www.aseprite.org/"`).
    #[serde(default)]
    pub app: String,
    /// Source application version.
    #[serde(default)]
    pub version: String,
    /// Packed sheet image path, relative to the export file's directory.
    pub image: String,
    /// Canvas dimensions of the packed sheet image.
    pub size: SheetSize,
    /// Layers in editor order.
    pub layers: Vec<Layer>,
    /// Animation tags in editor order.
    #[serde(rename = "frameTags")]
    pub frame_tags: Vec<FrameTag>,
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SheetSize {
    pub w: u32,
    pub h: u32,
}

/// A named layer grouping animations that share a sprite identity.
#[derive(Debug, Clone, Deserialize)]
pub struct Layer {
    pub name: String,
}

/// A named inclusive range over the frame sequence: one animation clip.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameTag {
    pub name: String,
    /// First frame index of the clip (0-based, inclusive).
    pub from: u32,
    /// Last frame index of the clip (inclusive); `to - from + 1` frames.
    pub to: u32,
    pub direction: Direction,
}

impl FrameTag {
    /// Number of frames in the clip, or `None` when the range is malformed:
    /// `to < from`, or a span so large its length overflows.
    pub fn frame_count(&self) -> Option<u32> {
        self.to
            .checked_sub(self.from)
            .and_then(|d| d.checked_add(1))
    }
}

/// Playback direction of an animation clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Reverse,
    Pingpong,
    PingpongReverse,
}

impl Direction {
    /// Returns the direction as the string the editor writes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
            Direction::Pingpong => "pingpong",
            Direction::PingpongReverse => "pingpong_reverse",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
