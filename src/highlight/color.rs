//! Color identifiers accepted in `diagonal:color` highlight entries.
//!
//! Anything CSS understands (named colors, `#rgb`, `#rrggbb`, `rgb(...)`,
//! `hsl(...)`) goes through `csscolorparser`. The plotting shorthands
//! (`r`, `k`, `tab:blue`, `C0`, ...) are looked up first.

use crate::error::{TompkinsError, TompkinsResult};

/// Single-letter codes. These differ from CSS (`g` is dark green, `c` is not
/// full cyan), so they can't be left to the CSS names.
const SHORT_CODES: &[(&str, (u8, u8, u8))] = &[
    ("b", (0, 0, 255)),
    ("g", (0, 128, 0)),
    ("r", (255, 0, 0)),
    ("c", (0, 191, 191)),
    ("m", (191, 0, 191)),
    ("y", (191, 191, 0)),
    ("k", (0, 0, 0)),
    ("w", (255, 255, 255)),
];

/// Tableau 10, reachable as `tab:<name>` or by cycle index `C0`..`C9`.
const TABLEAU: &[(&str, (u8, u8, u8))] = &[
    ("blue", (31, 119, 180)),
    ("orange", (255, 127, 14)),
    ("green", (44, 160, 44)),
    ("red", (214, 39, 40)),
    ("purple", (148, 103, 189)),
    ("brown", (140, 86, 75)),
    ("pink", (227, 119, 194)),
    ("gray", (127, 127, 127)),
    ("olive", (188, 189, 34)),
    ("cyan", (23, 190, 207)),
];

/// Resolve a color identifier to RGB, ignoring case. Alpha is dropped; ring
/// opacity is fixed by the renderer.
pub fn parse_color(id: &str) -> TompkinsResult<(u8, u8, u8)> {
    let lower = id.trim().to_ascii_lowercase();
    if let Some(rgb) = lookup_shorthand(&lower) {
        return Ok(rgb);
    }
    let color = csscolorparser::parse(&lower)
        .map_err(|e| TompkinsError::invalid(format!("unknown color '{}': {}", id.trim(), e)))?;
    let [r, g, b, _] = color.to_rgba8();
    Ok((r, g, b))
}

fn lookup_shorthand(lower: &str) -> Option<(u8, u8, u8)> {
    if let Some((_, rgb)) = SHORT_CODES.iter().find(|(code, _)| *code == lower) {
        return Some(*rgb);
    }
    if let Some(name) = lower.strip_prefix("tab:") {
        let name = if name == "grey" { "gray" } else { name };
        return TABLEAU.iter().find(|(n, _)| *n == name).map(|(_, rgb)| *rgb);
    }
    let digits = lower.strip_prefix('c')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: usize = digits.parse().ok()?;
    TABLEAU.get(index).map(|(_, rgb)| *rgb)
}
