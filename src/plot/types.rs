//! Scene and output types shared by layout and rendering.

use std::path::PathBuf;

/// Canvas background (RGB).
pub const BG_COLOR: (u8, u8, u8) = (255, 255, 255);
/// Text color for cell values and the title.
pub const TEXT_COLOR: (u8, u8, u8) = (0, 0, 0);
/// Cell box fill and edge: black at low opacity.
pub const BOX_FILL_ALPHA: f64 = 0.03;
pub const BOX_EDGE_ALPHA: f64 = 0.15;
/// Stroke used for the single (legacy) highlight.
pub const DEFAULT_RING_COLOR: (u8, u8, u8) = (0, 0, 0);
pub const DEFAULT_RING_ALPHA: f64 = 0.75;
/// Opacity of colored multi-highlight rings.
pub const COLOR_RING_ALPHA: f64 = 0.85;

/// Geometry in triangle units.
pub const BOX_SIDE_CELLS: f64 = 0.76;
pub const BOX_RADIUS_CELLS: f64 = 0.05;
pub const RING_RADIUS_CELLS: f64 = 0.46;
/// Ring line width at `cell_px = 72`.
pub const RING_STROKE_AT_72: f64 = 2.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HighlightStyle {
    /// Neutral stroke for `--highlight`.
    Default,
    /// Colored stroke for a `--highlight-multi` entry.
    Color((u8, u8, u8)),
}

impl HighlightStyle {
    pub fn rgba(&self) -> (u8, u8, u8, f64) {
        match self {
            HighlightStyle::Default => {
                let (r, g, b) = DEFAULT_RING_COLOR;
                (r, g, b, DEFAULT_RING_ALPHA)
            }
            HighlightStyle::Color((r, g, b)) => (*r, *g, *b, COLOR_RING_ALPHA),
        }
    }
}

/// One triangle cell placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CellMark {
    pub n: usize,
    pub r: usize,
    /// Pixel center.
    pub center: (i32, i32),
    pub label: String,
}

/// One highlight ring. A cell can carry several.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightMark {
    pub n: usize,
    pub r: usize,
    pub diagonal: i64,
    pub center: (i32, i32),
    pub style: HighlightStyle,
}

/// Everything the rasterizer needs, in pixels.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub title_center: (i32, i32),
    pub title_font_px: f64,
    pub font_px: f64,
    pub font_family: String,
    pub box_half_px: f64,
    pub box_radius_px: f64,
    pub ring_radius_px: i32,
    pub ring_stroke_px: u32,
    pub cells: Vec<CellMark>,
    pub highlights: Vec<HighlightMark>,
}

/// Result of a successful render.
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub path: PathBuf,
    /// Dimensions of the written (cropped) image.
    pub width: u32,
    pub height: u32,
    pub highlights: usize,
}
