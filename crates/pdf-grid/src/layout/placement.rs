//! Content placement within cells
//!
//! Source pages are scaled uniformly to fit their cell on both axes and
//! centered. Degenerate cells or pages are reported instead of producing
//! infinite or NaN scales.

use crate::types::SlotError;

use super::{Placement, Rect};

/// Uniform scale that fits `source` inside `target` on both axes.
///
/// Callers must have checked that every dimension is positive.
pub fn fit_scale(source_width: f32, source_height: f32, target_width: f32, target_height: f32) -> f32 {
    let scale_x = target_width / source_width;
    let scale_y = target_height / source_height;
    scale_x.min(scale_y)
}

/// Calculate the placement of a source page inside a cell.
///
/// # Arguments
/// * `cell` - The cell bounds
/// * `source_width` - Width of the source page in points
/// * `source_height` - Height of the source page in points
///
/// # Errors
/// [`SlotError::DegenerateCell`] when the cell has no positive area,
/// [`SlotError::DegeneratePage`] when the page has no positive size.
pub fn place_in_cell(
    cell: &Rect,
    source_width: f32,
    source_height: f32,
) -> Result<Placement, SlotError> {
    if !cell.has_area() {
        return Err(SlotError::DegenerateCell {
            width: cell.width,
            height: cell.height,
        });
    }

    let page = Rect::new(0.0, 0.0, source_width, source_height);
    if !page.has_area() {
        return Err(SlotError::DegeneratePage {
            width: source_width,
            height: source_height,
        });
    }

    let scale = fit_scale(source_width, source_height, cell.width, cell.height);
    let scaled_width = source_width * scale;
    let scaled_height = source_height * scale;

    // Center in cell
    let x_offset = (cell.width - scaled_width) / 2.0;
    let y_offset = (cell.height - scaled_height) / 2.0;

    Ok(Placement {
        cell: *cell,
        content: Rect::new(
            cell.x + x_offset,
            cell.y + y_offset,
            scaled_width,
            scaled_height,
        ),
        scale,
    })
}
