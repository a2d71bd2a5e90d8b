use crate::constants::{GRID_COLUMNS, MAX_ITEMS};
use crate::layout::{GridPosition, GridSlot};
use crate::types::SourceItem;
use std::fmt;

/// Width of one cell in the text rendering
const PREVIEW_CELL_WIDTH: usize = 18;

/// Which item lands in which slot, without decoding anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPreview {
    pub slot: GridSlot,
    pub position: GridPosition,
    pub source_name: Option<String>,
}

/// Slot assignment preview of a whole sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPreview {
    pub slots: Vec<SlotPreview>,
    /// Items past the ninth
    pub ignored_items: usize,
}

impl GridPreview {
    pub fn from_items(items: &[SourceItem]) -> Self {
        let slots = (0..MAX_ITEMS)
            .map(|index| {
                let slot = GridSlot(index);
                SlotPreview {
                    slot,
                    position: slot.position(),
                    source_name: items.get(index).map(|item| item.name.clone()),
                }
            })
            .collect();

        Self {
            slots,
            ignored_items: items.len().saturating_sub(MAX_ITEMS),
        }
    }

    pub fn filled(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.source_name.is_some())
            .count()
    }
}

impl fmt::Display for GridPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = format!(
            "+{}\n",
            format!("{}+", "-".repeat(PREVIEW_CELL_WIDTH)).repeat(GRID_COLUMNS)
        );

        f.write_str(&rule)?;
        for row in self.slots.chunks(GRID_COLUMNS) {
            f.write_str("|")?;
            for slot in row {
                let label = match &slot.source_name {
                    Some(name) => format!("{} {}", slot.slot.index() + 1, name),
                    None => format!("{} (empty)", slot.slot.index() + 1),
                };
                write!(f, "{:<width$}|", truncate(&label), width = PREVIEW_CELL_WIDTH)?;
            }
            f.write_str("\n")?;
            f.write_str(&rule)?;
        }

        if self.ignored_items > 0 {
            writeln!(f, "{} item(s) ignored", self.ignored_items)?;
        }
        Ok(())
    }
}

fn truncate(label: &str) -> String {
    if label.chars().count() <= PREVIEW_CELL_WIDTH {
        label.to_string()
    } else {
        let kept: String = label.chars().take(PREVIEW_CELL_WIDTH - 1).collect();
        format!("{}~", kept)
    }
}
