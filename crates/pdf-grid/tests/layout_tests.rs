use pdf_grid::layout::*;
use pdf_grid::*;

const EPSILON: f32 = 1e-3;

fn a4_grid(count: usize, config: &SheetConfig) -> [CellGeometry; MAX_ITEMS] {
    let (width, height) = config.sheet_dimensions_pt();
    compute_grid(count, width, height, config)
}

#[test]
fn test_occupancy_follows_item_count() {
    let config = SheetConfig::default();
    for count in 0..=MAX_ITEMS {
        let grid = a4_grid(count, &config);
        assert_eq!(grid.len(), 9);
        let occupied = grid.iter().filter(|cell| cell.occupied).count();
        assert_eq!(occupied, count);
        assert!(grid[..count].iter().all(|cell| cell.occupied));
    }
}

#[test]
fn test_slot_positions_are_row_major() {
    for index in 0..MAX_ITEMS {
        let pos = GridSlot(index).position();
        assert_eq!(pos, GridPosition::new(index / 3, index % 3));
    }
}

#[test]
fn test_row_zero_is_visual_top() {
    let grid = a4_grid(9, &SheetConfig::default());
    let (_, sheet_height) = SheetConfig::default().sheet_dimensions_pt();

    // Top row touches the top margin, bottom row the bottom margin
    assert!((grid[0].cell.top() - (sheet_height - DEFAULT_MARGIN_PT)).abs() < EPSILON);
    assert!((grid[6].cell.y - DEFAULT_MARGIN_PT).abs() < EPSILON);

    for col in 0..3 {
        assert!(grid[col].cell.y > grid[col + 3].cell.y);
        assert!(grid[col + 3].cell.y > grid[col + 6].cell.y);
    }
}

#[test]
fn test_cells_fill_content_area_exactly() {
    let config = SheetConfig {
        margin_pt: 30.0,
        gap_pt: 12.0,
        ..Default::default()
    };
    let (width, height) = config.sheet_dimensions_pt();
    let (cell_width, cell_height) = cell_dimensions(width, height, &config);

    assert!((3.0 * cell_width + 2.0 * 12.0 - (width - 60.0)).abs() < EPSILON);
    assert!((3.0 * cell_height + 2.0 * 12.0 - (height - 60.0)).abs() < EPSILON);
}

#[test]
fn test_placements_stay_inside_cells() {
    let grid = a4_grid(9, &SheetConfig::default());
    let sizes = [
        (612.0, 792.0),
        (595.28, 841.89),
        (842.0, 595.0),
        (1.0, 1.0),
        (10_000.0, 5.0),
        (5.0, 10_000.0),
    ];

    for geometry in &grid {
        for &(w, h) in &sizes {
            let placement = place_in_cell(&geometry.cell, w, h).unwrap();
            let cell = geometry.cell;

            assert_eq!(
                placement.scale,
                (cell.width / w).min(cell.height / h),
                "slot {} size {}x{}",
                geometry.slot.index(),
                w,
                h
            );
            assert!(placement.content.x >= cell.x - EPSILON);
            assert!(placement.content.y >= cell.y - EPSILON);
            assert!(placement.content.right() <= cell.right() + EPSILON);
            assert!(placement.content.top() <= cell.top() + EPSILON);

            assert!(placement.x_offset() >= -EPSILON);
            assert!(placement.y_offset() >= -EPSILON);
            assert!((cell.width - placement.content.width - 2.0 * placement.x_offset()).abs() < EPSILON);
            assert!((cell.height - placement.content.height - 2.0 * placement.y_offset()).abs() < EPSILON);
        }
    }
}

#[test]
fn test_no_cells_overlap() {
    let grid = a4_grid(9, &SheetConfig::default());
    for a in &grid {
        for b in &grid {
            if a.slot == b.slot {
                continue;
            }
            let disjoint = a.cell.right() <= b.cell.x
                || b.cell.right() <= a.cell.x
                || a.cell.top() <= b.cell.y
                || b.cell.top() <= a.cell.y;
            assert!(disjoint, "slots {:?} and {:?} overlap", a.slot, b.slot);
        }
    }
}
