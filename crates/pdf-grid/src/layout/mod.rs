//! Layout calculation for the grid sheet
//!
//! This module handles all the geometric calculations:
//! - Grid partition (cell dimensions and bounds per slot)
//! - Content placement (scale-to-fit and centering)

mod grid;
mod placement;
mod types;

pub use grid::*;
pub use placement::*;
pub use types::*;
