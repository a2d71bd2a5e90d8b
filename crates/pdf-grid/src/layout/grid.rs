//! Grid partition of the sheet
//!
//! The sheet is split into a fixed 3×3 grid inside a uniform margin, with
//! `gap` points between neighbouring cells. Slots are numbered row-major
//! from the visual top-left.

use crate::constants::{GRID_COLUMNS, GRID_ROWS, MAX_ITEMS};
use crate::options::SheetConfig;

use super::{CellGeometry, GridPosition, GridSlot, Rect};

// =============================================================================
// Grid Creation
// =============================================================================

/// Compute the cell geometry of every slot on the sheet.
///
/// Always returns exactly [`MAX_ITEMS`] entries. The first `item_count`
/// (capped at [`MAX_ITEMS`]) are marked occupied.
///
/// # Arguments
/// * `item_count` - Number of items to lay out
/// * `sheet_width` - Sheet width in points
/// * `sheet_height` - Sheet height in points
/// * `config` - Margin and gap
pub fn compute_grid(
    item_count: usize,
    sheet_width: f32,
    sheet_height: f32,
    config: &SheetConfig,
) -> [CellGeometry; MAX_ITEMS] {
    let occupied = item_count.min(MAX_ITEMS);
    let (cell_width, cell_height) = cell_dimensions(sheet_width, sheet_height, config);

    std::array::from_fn(|index| {
        let slot = GridSlot(index);
        CellGeometry {
            slot,
            occupied: index < occupied,
            cell: cell_bounds(
                slot.position(),
                cell_width,
                cell_height,
                sheet_height,
                config,
            ),
        }
    })
}

/// Size (width, height) of a single cell in points.
///
/// The gap only appears between cells, never at the outer edge. The result
/// can be zero or negative when margin and gap leave no room.
pub fn cell_dimensions(sheet_width: f32, sheet_height: f32, config: &SheetConfig) -> (f32, f32) {
    let content_width = sheet_width - 2.0 * config.margin_pt;
    let content_height = sheet_height - 2.0 * config.margin_pt;

    let gaps_across = (GRID_COLUMNS - 1) as f32 * config.gap_pt;
    let gaps_down = (GRID_ROWS - 1) as f32 * config.gap_pt;

    (
        (content_width - gaps_across) / GRID_COLUMNS as f32,
        (content_height - gaps_down) / GRID_ROWS as f32,
    )
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Calculate the bounds of the cell at the given grid position.
///
/// Rows are laid out top-down, then converted to the sheet's bottom-left
/// origin with [`top_to_bottom_origin`].
pub fn cell_bounds(
    pos: GridPosition,
    cell_width: f32,
    cell_height: f32,
    sheet_height: f32,
    config: &SheetConfig,
) -> Rect {
    let x = config.margin_pt + pos.col as f32 * (cell_width + config.gap_pt);
    let y_from_top = config.margin_pt + pos.row as f32 * (cell_height + config.gap_pt);
    let y = top_to_bottom_origin(y_from_top, cell_height, sheet_height);

    Rect::new(x, y, cell_width, cell_height)
}

/// Convert the top edge of a box, measured down from the top of the sheet,
/// into the bottom edge measured up from the bottom of the sheet.
///
/// Row 0 must come out with the highest y; a sign slip here silently
/// reverses the row order.
#[inline]
pub fn top_to_bottom_origin(y_from_top: f32, height: f32, sheet_height: f32) -> f32 {
    sheet_height - y_from_top - height
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config(margin: f32, gap: f32) -> SheetConfig {
        SheetConfig {
            margin_pt: margin,
            gap_pt: gap,
            ..Default::default()
        }
    }

    #[test]
    fn test_cell_dimensions() {
        let (w, h) = cell_dimensions(630.0, 930.0, &config(15.0, 15.0));
        assert_eq!(w, 190.0);
        assert_eq!(h, 290.0);
    }

    #[test]
    fn test_cell_dimensions_can_go_negative() {
        let (w, h) = cell_dimensions(100.0, 100.0, &config(60.0, 0.0));
        assert!(w < 0.0);
        assert!(h < 0.0);
    }

    #[test]
    fn test_top_to_bottom_origin() {
        // A 100pt box touching the top of a 1000pt sheet
        assert_eq!(top_to_bottom_origin(0.0, 100.0, 1000.0), 900.0);
        // A 100pt box touching the bottom
        assert_eq!(top_to_bottom_origin(900.0, 100.0, 1000.0), 0.0);
        // Further down the page means lower y
        assert!(top_to_bottom_origin(300.0, 100.0, 1000.0) < top_to_bottom_origin(200.0, 100.0, 1000.0));
    }

    #[test]
    fn test_cell_bounds_corners() {
        let cfg = config(15.0, 15.0);

        // Top-left cell
        let bounds = cell_bounds(GridPosition::new(0, 0), 190.0, 290.0, 930.0, &cfg);
        assert_eq!(bounds, Rect::new(15.0, 625.0, 190.0, 290.0));
        assert_eq!(bounds.top(), 930.0 - 15.0);

        // Bottom-right cell
        let bounds = cell_bounds(GridPosition::new(2, 2), 190.0, 290.0, 930.0, &cfg);
        assert_eq!(bounds, Rect::new(425.0, 15.0, 190.0, 290.0));
        assert_eq!(bounds.right(), 630.0 - 15.0);
    }

    #[test]
    fn test_compute_grid_always_nine_entries() {
        let cfg = config(15.0, 15.0);
        for count in 0..=9 {
            let grid = compute_grid(count, 630.0, 930.0, &cfg);
            assert_eq!(grid.len(), 9);
            for (index, cell) in grid.iter().enumerate() {
                assert_eq!(cell.slot, GridSlot(index));
                assert_eq!(cell.occupied, index < count, "count {} slot {}", count, index);
            }
        }
    }

    #[test]
    fn test_compute_grid_caps_overcount() {
        let grid = compute_grid(14, 630.0, 930.0, &config(15.0, 15.0));
        assert!(grid.iter().all(|cell| cell.occupied));
    }

    #[test]
    fn test_rows_move_down_and_columns_move_right() {
        let grid = compute_grid(9, 630.0, 930.0, &config(15.0, 15.0));

        for cell in &grid {
            let pos = cell.slot.position();
            assert_eq!(pos.row, cell.slot.index() / 3);
            assert_eq!(pos.col, cell.slot.index() % 3);

            if pos.row > 0 {
                let above = grid[cell.slot.index() - 3].cell;
                assert!(cell.cell.top() < above.y, "slot {} overlaps the row above", cell.slot.0);
            }
            if pos.col > 0 {
                let left = grid[cell.slot.index() - 1].cell;
                assert!(cell.cell.x > left.right());
            }
        }
    }

    #[test]
    fn test_gap_between_cells() {
        let grid = compute_grid(9, 630.0, 930.0, &config(15.0, 15.0));
        assert_eq!(grid[1].cell.x - grid[0].cell.right(), 15.0);
        assert_eq!(grid[0].cell.y - grid[3].cell.top(), 15.0);
    }

    #[test]
    fn test_zero_margin_and_gap_tiles_the_sheet() {
        let grid = compute_grid(9, 300.0, 600.0, &config(0.0, 0.0));
        assert_eq!(grid[0].cell, Rect::new(0.0, 400.0, 100.0, 200.0));
        assert_eq!(grid[8].cell, Rect::new(200.0, 0.0, 100.0, 200.0));
    }
}
