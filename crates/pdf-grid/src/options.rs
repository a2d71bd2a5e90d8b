use crate::constants::{DEFAULT_GAP_PT, DEFAULT_MARGIN_PT, mm_to_pt};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sheet geometry and styling for one generation request
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetConfig {
    /// Uniform inset from every sheet edge, in points
    pub margin_pt: f32,
    /// Spacing between adjacent cells, in points
    pub gap_pt: f32,
    /// Outline every occupied cell in light gray
    pub show_borders: bool,

    // Output sheet
    pub paper_size: PaperSize,
    pub orientation: Orientation,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            margin_pt: DEFAULT_MARGIN_PT,
            gap_pt: DEFAULT_GAP_PT,
            show_borders: true,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
        }
    }
}

impl SheetConfig {
    /// Output sheet size (width, height) in points
    pub fn sheet_dimensions_pt(&self) -> (f32, f32) {
        let (w, h) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        (mm_to_pt(w), mm_to_pt(h))
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| GridError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GridError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options.
    ///
    /// Margins and gaps large enough to leave no room for the cells are
    /// accepted here; generation reports those cells as failed slots.
    pub fn validate(&self) -> Result<()> {
        if !self.margin_pt.is_finite() || self.margin_pt < 0.0 {
            return Err(GridError::Config(format!(
                "Margin must be a non-negative number, got {}",
                self.margin_pt
            )));
        }

        if !self.gap_pt.is_finite() || self.gap_pt < 0.0 {
            return Err(GridError::Config(format!(
                "Gap must be a non-negative number, got {}",
                self.gap_pt
            )));
        }

        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if !(width_mm.is_finite() && height_mm.is_finite() && width_mm > 0.0 && height_mm > 0.0) {
            return Err(GridError::Config(format!(
                "Paper size must be positive, got {} x {} mm",
                width_mm, height_mm
            )));
        }

        Ok(())
    }
}
