use serde::Deserialize;
use std::path::Path;

use crate::error::{TompkinsError, TompkinsResult};

/// Layout and typography knobs for the renderer.
///
/// Distances named `*_cells` are in triangle units (one unit = horizontal
/// spacing between neighbouring cells); `*_px` are output pixels.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Pixels per triangle unit.
    pub cell_px: f64,
    /// Vertical spacing multiplier between rows.
    pub yscale: f64,
    /// Margin around the triangle, in units.
    pub pad_cells: f64,
    /// Height reserved above the triangle for the title.
    pub title_band_px: u32,
    /// Font size for `n_max = 0`.
    pub base_font: f64,
    /// Font size lost per additional row.
    pub font_shrink: f64,
    /// Lower bound on the font size.
    pub min_font: f64,
    /// Converts font sizes to pixels.
    pub font_px_scale: f64,
    pub font_family: String,
    /// Whitespace kept around the drawn content after cropping.
    pub crop_padding_px: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_px: 72.0,
            yscale: 1.0,
            pad_cells: 0.9,
            title_band_px: 64,
            base_font: 28.0,
            font_shrink: 1.1,
            min_font: 10.0,
            font_px_scale: 1.0,
            font_family: "sans-serif".to_string(),
            crop_padding_px: 12,
        }
    }
}

impl RenderConfig {
    /// Load a config from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> TompkinsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TompkinsError::io(format!("cannot read config {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| TompkinsError::config(format!("{}: {}", path.display(), e.message)))?;
        log::debug!("loaded render config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> TompkinsResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| TompkinsError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> TompkinsResult<()> {
        let positive = [
            ("cell_px", self.cell_px),
            ("yscale", self.yscale),
            ("min_font", self.min_font),
            ("font_px_scale", self.font_px_scale),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TompkinsError::config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !(self.pad_cells.is_finite() && self.pad_cells >= 0.0) {
            return Err(TompkinsError::config("pad_cells must be >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RenderConfig::from_toml("cell_px = 40.0\nfont_family = \"serif\"\n").unwrap();
        assert_eq!(config.cell_px, 40.0);
        assert_eq!(config.font_family, "serif");
        assert_eq!(config.base_font, RenderConfig::default().base_font);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RenderConfig::from_toml("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_bad_toml() {
        let err = RenderConfig::from_toml("cell_px = \"big\"").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = RenderConfig::from_toml("cell_px = 0.0").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
        assert!(RenderConfig::from_toml("pad_cells = -1.0").is_err());
    }

    #[test]
    fn test_missing_file_is_io() {
        let err = RenderConfig::load(Path::new("/nonexistent/tompkins.toml")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io);
    }
}
