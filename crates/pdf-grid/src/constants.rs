//! Shared constants for grid composition
//!
//! This module centralizes magic numbers and constants used throughout
//! layout and rendering.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Grid Shape
// =============================================================================

/// Columns in the grid
pub const GRID_COLUMNS: usize = 3;

/// Rows in the grid
pub const GRID_ROWS: usize = 3;

/// Number of slots on a sheet; items past this are ignored
pub const MAX_ITEMS: usize = GRID_COLUMNS * GRID_ROWS;

// =============================================================================
// Sheet Defaults
// =============================================================================

/// Default outer margin (points)
pub const DEFAULT_MARGIN_PT: f32 = 20.0;

/// Default spacing between adjacent cells (points)
pub const DEFAULT_GAP_PT: f32 = 15.0;

/// Fallback source page size when a page carries no MediaBox (US Letter)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (612.0, 792.0);

// =============================================================================
// Cell Outlines
// =============================================================================

/// Stroke width for cell borders and error outlines (points)
pub const BORDER_LINE_WIDTH: f32 = 1.0;

/// Light gray stroke for cell borders (RGB)
pub const BORDER_COLOR: (f32, f32, f32) = (0.8, 0.8, 0.8);

/// Red stroke for cells whose source failed (RGB)
pub const ERROR_OUTLINE_COLOR: (f32, f32, f32) = (1.0, 0.0, 0.0);
