//! Combine up to nine single-page PDFs into one 3×3 grid sheet.
//!
//! The crate is split the same way the work is:
//! - [`layout`] computes cell bounds and scale-to-fit placements (pure, no I/O)
//! - `render` turns source pages into Form XObjects and writes the sheet
//! - [`compose`] decodes sources, isolates per-item failures and serializes

pub mod compose;
mod constants;
pub mod layout;
mod options;
mod preview;
mod render;
mod stats;
mod types;

pub use compose::{GeneratedGrid, SlotOutcome, SlotReport, generate, generate_blocking};
pub use constants::*;
pub use options::SheetConfig;
pub use preview::{GridPreview, SlotPreview};
pub use stats::GridStatistics;
pub use types::*;
