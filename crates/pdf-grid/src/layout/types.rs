//! Layout data types for the grid
//!
//! These types sit between the pure geometry in this module and the PDF
//! rendering that consumes it. All coordinates are PDF points with the
//! origin at the bottom-left of the sheet.

use crate::constants::GRID_COLUMNS;

/// A slot index (0..9) in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridSlot(pub usize);

impl GridSlot {
    pub fn index(self) -> usize {
        self.0
    }

    /// Grid position of this slot (row 0 is the visual top)
    pub fn position(self) -> GridPosition {
        GridPosition::new(self.0 / GRID_COLUMNS, self.0 % GRID_COLUMNS)
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Whether both dimensions are positive and finite
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Cell geometry for one slot, occupied or not
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub slot: GridSlot,
    /// Whether an item is assigned to this slot
    pub occupied: bool,
    /// Full cell bounds
    pub cell: Rect,
}

/// Where a source page ends up inside its cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Full cell bounds
    pub cell: Rect,
    /// Scaled and centered page bounds
    pub content: Rect,
    /// Uniform scale applied to the source page
    pub scale: f32,
}

impl Placement {
    /// Horizontal inset of the content from the cell's left edge
    pub fn x_offset(&self) -> f32 {
        self.content.x - self.cell.x
    }

    /// Vertical inset of the content from the cell's bottom edge
    pub fn y_offset(&self) -> f32 {
        self.content.y - self.cell.y
    }
}
