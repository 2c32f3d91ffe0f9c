//! Triangle → Scene: cell positions, highlight rings, title and canvas size.

use crate::config::RenderConfig;
use crate::error::TompkinsResult;
use crate::highlight::{on_diagonal, parse_color, HighlightSpec};
use crate::plot::types::*;
use crate::triangle::Triangle;

/// Rough advance width of a glyph relative to its font size.
const GLYPH_ASPECT: f64 = 0.6;

/// Maps triangle units to canvas pixels.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    xmin: f64,
    ymax: f64,
    cell_px: f64,
    x_offset: f64,
    y_offset: f64,
}

impl Geometry {
    fn to_px(&self, x: f64, y: f64) -> (i32, i32) {
        let px = self.x_offset + (x - self.xmin) * self.cell_px;
        let py = self.y_offset + (self.ymax - y) * self.cell_px;
        (px.round() as i32, py.round() as i32)
    }
}

/// Font size for a triangle with `n_max` rows below the apex.
pub fn font_size(n_max: usize, config: &RenderConfig) -> f64 {
    (config.base_font - config.font_shrink * n_max as f64).max(config.min_font) * config.font_px_scale
}

/// Unit-space position of cell `(n, r)`; row `n` is centered under row `n - 1`.
pub fn cell_position(n: usize, r: usize, yscale: f64) -> (f64, f64) {
    let x = r as f64 - n as f64 / 2.0;
    let y = -(n as f64 * yscale);
    (x, y)
}

pub fn title_text(triangle: &Triangle) -> String {
    format!(
        "Tompkins Triangle  T_{}  (c={}), rows 0..{}",
        triangle.k(),
        triangle.c(),
        triangle.n_max()
    )
}

/// Lay out every cell and highlight ring.
///
/// Multi-highlight colors are resolved up front, so an unknown color fails
/// here before any pixels are touched.
pub fn layout_scene(
    triangle: &Triangle,
    highlights: &HighlightSpec,
    config: &RenderConfig,
) -> TompkinsResult<Scene> {
    let colored: Vec<(i64, (u8, u8, u8))> = highlights
        .multi
        .iter()
        .map(|(j, id)| parse_color(id).map(|rgb| (*j, rgb)))
        .collect::<TompkinsResult<_>>()?;

    let n_max = triangle.n_max();
    let half = n_max as f64 / 2.0;
    let xmin = -half - config.pad_cells;
    let xmax = half + config.pad_cells;
    let ymin = -(n_max as f64 * config.yscale) - config.pad_cells;
    let ymax = config.pad_cells;

    let font_px = font_size(n_max, config);
    let title = title_text(triangle);
    let title_font_px = font_px + 2.0 * config.font_px_scale;

    let tri_width = ((xmax - xmin) * config.cell_px).ceil();
    let title_width = (title.chars().count() as f64 * title_font_px * GLYPH_ASPECT).ceil()
        + 2.0 * config.crop_padding_px as f64;
    let width = tri_width.max(title_width);
    let title_band = (config.title_band_px as f64).max(title_font_px * 2.0).ceil();
    let height = title_band + ((ymax - ymin) * config.cell_px).ceil();

    let geom = Geometry {
        xmin,
        ymax,
        cell_px: config.cell_px,
        x_offset: ((width - tri_width) / 2.0).floor(),
        y_offset: title_band,
    };

    let mut cells = Vec::new();
    let mut marks = Vec::new();
    for (n, r, value) in triangle.cells() {
        let (x, y) = cell_position(n, r, config.yscale);
        let center = geom.to_px(x, y);
        cells.push(CellMark {
            n,
            r,
            center,
            label: value.to_string(),
        });

        if let Some(j) = highlights.single {
            if on_diagonal(n, r, j) {
                marks.push(HighlightMark {
                    n,
                    r,
                    diagonal: j,
                    center,
                    style: HighlightStyle::Default,
                });
            }
        }
        for (j, rgb) in &colored {
            if on_diagonal(n, r, *j) {
                marks.push(HighlightMark {
                    n,
                    r,
                    diagonal: *j,
                    center,
                    style: HighlightStyle::Color(*rgb),
                });
            }
        }
    }

    let scene = Scene {
        width: width as u32,
        height: height as u32,
        title,
        title_center: ((width / 2.0).round() as i32, (title_band / 2.0).round() as i32),
        title_font_px,
        font_px,
        font_family: config.font_family.clone(),
        box_half_px: BOX_SIDE_CELLS * config.cell_px / 2.0,
        box_radius_px: BOX_RADIUS_CELLS * config.cell_px,
        ring_radius_px: (RING_RADIUS_CELLS * config.cell_px).round() as i32,
        ring_stroke_px: (RING_STROKE_AT_72 * config.cell_px / 72.0).round().max(1.0) as u32,
        cells,
        highlights: marks,
    };
    log::debug!(
        "layout: {}x{} px, {} cells, {} highlight rings, font {:.1}px",
        scene.width,
        scene.height,
        scene.cells.len(),
        scene.highlights.len(),
        scene.font_px
    );
    Ok(scene)
}
