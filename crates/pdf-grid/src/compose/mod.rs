//! Grid composition - placing source pages on the output sheet
//!
//! This module orchestrates one generation request:
//! 1. Decode each source (in parallel when run async) and take its first page
//! 2. Compute the grid and a placement per slot
//! 3. Draw pages, borders and error outlines in slot order
//! 4. Serialize the sheet
//!
//! A source that cannot be decoded or placed only costs its own slot.

mod decode;

use crate::constants::{BORDER_COLOR, ERROR_OUTLINE_COLOR, MAX_ITEMS};
use crate::layout::{GridSlot, Placement, Rect, compute_grid, place_in_cell};
use crate::options::SheetConfig;
use crate::render::{GridSheet, SourcePage};
use crate::stats::GridStatistics;
use crate::types::*;
use decode::decode_source;

/// What happened to one slot of the sheet
#[derive(Debug, Clone, PartialEq)]
pub enum SlotOutcome {
    /// The source page was drawn at this placement
    Placed(Placement),
    /// The source could not be drawn; the cell carries an error outline
    Failed { cell: Rect, error: SlotError },
    /// No item was assigned to this slot
    Empty { cell: Rect },
}

impl SlotOutcome {
    /// Full cell bounds of the slot
    pub fn cell(&self) -> Rect {
        match self {
            SlotOutcome::Placed(placement) => placement.cell,
            SlotOutcome::Failed { cell, .. } | SlotOutcome::Empty { cell } => *cell,
        }
    }
}

/// Per-slot entry of a generation report
#[derive(Debug, Clone, PartialEq)]
pub struct SlotReport {
    pub slot: GridSlot,
    /// Display name of the assigned item, if any
    pub source_name: Option<String>,
    pub outcome: SlotOutcome,
}

/// Result of one generation request
#[derive(Debug, Clone)]
pub struct GeneratedGrid {
    /// The serialized single-page PDF
    pub pdf: Vec<u8>,
    /// One report per slot, in slot order
    pub slots: Vec<SlotReport>,
    /// Items past the ninth that were not laid out
    pub ignored_items: usize,
}

impl GeneratedGrid {
    /// Placements of all drawn slots, in slot order
    pub fn placements(&self) -> Vec<(GridSlot, Placement)> {
        self.slots
            .iter()
            .filter_map(|report| match &report.outcome {
                SlotOutcome::Placed(placement) => Some((report.slot, *placement)),
                _ => None,
            })
            .collect()
    }

    pub fn statistics(&self) -> GridStatistics {
        GridStatistics::from_reports(&self.slots, self.ignored_items)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Compose up to nine sources into one grid sheet.
///
/// Sources are decoded concurrently on the blocking pool; drawing happens
/// afterwards in slot order. Fails only when the final document cannot be
/// serialized or the composing task dies.
pub async fn generate(items: &[SourceItem], config: &SheetConfig) -> Result<GeneratedGrid> {
    let (used, ignored_items) = split_items(items);

    let handles: Vec<_> = used
        .iter()
        .map(|item| {
            let bytes = item.bytes.clone();
            tokio::task::spawn_blocking(move || decode_source(&bytes))
        })
        .collect();

    let decoded = join_decoded(handles).await;

    let names: Vec<String> = used.iter().map(|item| item.name.clone()).collect();
    let config = *config;

    tokio::task::spawn_blocking(move || compose(names, decoded, ignored_items, &config)).await?
}

/// Synchronous version of [`generate`]
pub fn generate_blocking(items: &[SourceItem], config: &SheetConfig) -> Result<GeneratedGrid> {
    let (used, ignored_items) = split_items(items);

    let decoded = used.iter().map(|item| decode_source(&item.bytes)).collect();
    let names = used.iter().map(|item| item.name.clone()).collect();

    compose(names, decoded, ignored_items, config)
}

type Decoded = std::result::Result<SourcePage, SlotError>;

/// Await decode tasks in slot order. A panicking decode only costs its own slot.
async fn join_decoded(handles: Vec<tokio::task::JoinHandle<Decoded>>) -> Vec<Decoded> {
    let mut decoded = Vec::with_capacity(handles.len());
    for handle in handles {
        decoded.push(
            handle
                .await
                .unwrap_or_else(|e| Err(SlotError::Decode(e.to_string()))),
        );
    }
    decoded
}

fn split_items(items: &[SourceItem]) -> (&[SourceItem], usize) {
    let used = &items[..items.len().min(MAX_ITEMS)];
    let ignored = items.len() - used.len();
    if ignored > 0 {
        log::warn!(
            "{} items supplied, only the first {} are laid out",
            items.len(),
            MAX_ITEMS
        );
    }
    (used, ignored)
}

// =============================================================================
// Composition
// =============================================================================

fn compose(
    names: Vec<String>,
    decoded: Vec<Decoded>,
    ignored_items: usize,
    config: &SheetConfig,
) -> Result<GeneratedGrid> {
    let (sheet_width, sheet_height) = config.sheet_dimensions_pt();
    let grid = compute_grid(decoded.len(), sheet_width, sheet_height, config);

    let mut sheet = GridSheet::new();
    let mut slots = Vec::with_capacity(MAX_ITEMS);
    let mut prune = false;

    let mut sources = names.into_iter().zip(decoded);

    for geometry in grid {
        let slot = geometry.slot;
        let cell = geometry.cell;

        let Some((name, source)) = sources.next() else {
            slots.push(SlotReport {
                slot,
                source_name: None,
                outcome: SlotOutcome::Empty { cell },
            });
            continue;
        };

        let placed = source.and_then(|page| {
            let (width, height) = page.size();
            let placement = place_in_cell(&cell, width, height)?;
            sheet.draw_page(slot, &page, &placement).map_err(|e| {
                prune = true;
                SlotError::Decode(e.to_string())
            })?;
            Ok(placement)
        });

        let outcome = match placed {
            Ok(placement) => {
                log::debug!(
                    "Slot {}: placed '{}' at ({}, {}) scale {}",
                    slot.index(),
                    name,
                    placement.content.x,
                    placement.content.y,
                    placement.scale
                );
                if config.show_borders {
                    sheet.outline(&cell, BORDER_COLOR);
                }
                SlotOutcome::Placed(placement)
            }
            Err(error) => {
                log::warn!("Slot {}: skipping '{}': {}", slot.index(), name, error);
                if cell.has_area() {
                    sheet.outline(&cell, ERROR_OUTLINE_COLOR);
                }
                SlotOutcome::Failed { cell, error }
            }
        };

        slots.push(SlotReport {
            slot,
            source_name: Some(name),
            outcome,
        });
    }

    let mut document = sheet.finish(sheet_width, sheet_height);
    if prune {
        // Drop objects left behind by pages that failed half-way through copying
        document.prune_objects();
    }

    let pdf = serialize(document)?;

    let grid = GeneratedGrid {
        pdf,
        slots,
        ignored_items,
    };
    let stats = grid.statistics();
    log::info!(
        "Generated grid: {} placed, {} failed, {} empty ({} bytes)",
        stats.placed,
        stats.failed,
        stats.empty,
        grid.pdf.len()
    );

    Ok(grid)
}

fn serialize(mut document: lopdf::Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    document
        .save_to(&mut writer)
        .map_err(|e| GridError::Serialization(e.to_string()))?;
    Ok(writer)
}
