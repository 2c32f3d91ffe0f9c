//! Rendering pipeline: Scene → RGB canvas via plotters → cropped PNG on disk.

use std::path::Path;

use crate::config::RenderConfig;
use crate::error::{TompkinsError, TompkinsResult};
use crate::highlight::HighlightSpec;
use crate::plot::layout::layout_scene;
use crate::plot::types::*;
use crate::triangle::Triangle;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, RgbImage};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Points per quarter circle when approximating rounded box corners.
const CORNER_SEGMENTS: usize = 6;

/// Lay out, rasterize and write `triangle` as a PNG at `out_path`.
pub fn render_triangle_png(
    triangle: &Triangle,
    highlights: &HighlightSpec,
    config: &RenderConfig,
    out_path: &Path,
) -> TompkinsResult<RenderReport> {
    let scene = layout_scene(triangle, highlights, config)?;
    let buf = rasterize(&scene)?;
    let image = RgbImage::from_raw(scene.width, scene.height, buf)
        .ok_or_else(|| TompkinsError::render("canvas buffer has the wrong size"))?;
    let cropped = crop_to_content(&image, config.crop_padding_px);
    let png = encode_rgb_to_png(cropped.as_raw(), cropped.width(), cropped.height())?;

    std::fs::write(out_path, &png)
        .map_err(|e| TompkinsError::io(format!("cannot write {}: {}", out_path.display(), e)))?;
    log::info!(
        "wrote {} ({}x{}, {} bytes)",
        out_path.display(),
        cropped.width(),
        cropped.height(),
        png.len()
    );

    Ok(RenderReport {
        path: out_path.to_path_buf(),
        width: cropped.width(),
        height: cropped.height(),
        highlights: scene.highlights.len(),
    })
}

/// Draw the scene into a fresh RGB buffer.
pub fn rasterize(scene: &Scene) -> TompkinsResult<Vec<u8>> {
    let mut buf = vec![0u8; (scene.width as usize) * (scene.height as usize) * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (scene.width, scene.height))
            .into_drawing_area();
        let (r, g, b) = BG_COLOR;
        root.fill(&RGBColor(r, g, b))
            .map_err(|e| TompkinsError::render(format!("fill: {}", e)))?;

        let (r, g, b) = TEXT_COLOR;
        let text_color = RGBColor(r, g, b);
        let box_fill = RGBAColor(r, g, b, BOX_FILL_ALPHA);
        let box_edge = RGBAColor(r, g, b, BOX_EDGE_ALPHA);
        let cell_style = TextStyle::from((scene.font_family.as_str(), scene.font_px).into_font())
            .pos(Pos::new(HPos::Center, VPos::Center))
            .color(&text_color);

        for cell in &scene.cells {
            let outline = rounded_box(cell.center, scene.box_half_px, scene.box_radius_px);
            root.draw(&Polygon::new(outline.clone(), box_fill.filled()))
                .map_err(|e| TompkinsError::render(format!("cell box: {}", e)))?;
            let mut closed = outline;
            closed.push(closed[0]);
            root.draw(&PathElement::new(closed, box_edge.stroke_width(1)))
                .map_err(|e| TompkinsError::render(format!("cell edge: {}", e)))?;
            root.draw(&Text::new(cell.label.as_str(), cell.center, &cell_style))
                .map_err(|e| TompkinsError::render(format!("cell label: {}", e)))?;
        }

        for mark in &scene.highlights {
            let (r, g, b, a) = mark.style.rgba();
            let stroke = RGBAColor(r, g, b, a).stroke_width(scene.ring_stroke_px);
            root.draw(&Circle::new(mark.center, scene.ring_radius_px, stroke))
                .map_err(|e| TompkinsError::render(format!("highlight ring: {}", e)))?;
        }

        let title_style =
            TextStyle::from((scene.font_family.as_str(), scene.title_font_px).into_font())
                .pos(Pos::new(HPos::Center, VPos::Center))
                .color(&text_color);
        root.draw(&Text::new(scene.title.as_str(), scene.title_center, title_style))
            .map_err(|e| TompkinsError::render(format!("title: {}", e)))?;

        root.present()
            .map_err(|e| TompkinsError::render(format!("present: {}", e)))?;
    }

    Ok(buf)
}

/// Outline of a square of half-side `half` centered on `center`, with
/// corners rounded to `radius`.
fn rounded_box(center: (i32, i32), half: f64, radius: f64) -> Vec<(i32, i32)> {
    let (cx, cy) = (center.0 as f64, center.1 as f64);
    let radius = radius.min(half);
    let inner = half - radius;
    // Corner arc centers, clockwise from top-right in screen space.
    let corners = [
        (cx + inner, cy - inner, -90.0f64),
        (cx + inner, cy + inner, 0.0),
        (cx - inner, cy + inner, 90.0),
        (cx - inner, cy - inner, 180.0),
    ];
    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    for (ax, ay, start) in corners {
        for step in 0..=CORNER_SEGMENTS {
            let angle = (start + 90.0 * step as f64 / CORNER_SEGMENTS as f64).to_radians();
            let x = ax + radius * angle.cos();
            let y = ay + radius * angle.sin();
            points.push((x.round() as i32, y.round() as i32));
        }
    }
    points.dedup();
    points
}

/// Crop to the bounding box of non-background pixels plus `padding`.
///
/// A blank image is returned unchanged.
fn crop_to_content(image: &RgbImage, padding: u32) -> RgbImage {
    let (r, g, b) = BG_COLOR;
    let bg = image::Rgb([r, g, b]);
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in image.enumerate_pixels() {
        if *px == bg {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    let Some((x0, y0, x1, y1)) = bounds else {
        return image.clone();
    };
    let left = x0.saturating_sub(padding);
    let top = y0.saturating_sub(padding);
    let right = (x1 + padding).min(image.width() - 1);
    let bottom = (y1 + padding).min(image.height() - 1);
    image::imageops::crop_imm(image, left, top, right - left + 1, bottom - top + 1).to_image()
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> TompkinsResult<Vec<u8>> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| TompkinsError::render(format!("PNG encode: {}", e)))?;
    Ok(png)
}
