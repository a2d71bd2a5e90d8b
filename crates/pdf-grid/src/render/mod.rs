//! PDF rendering for the grid sheet
//!
//! This module handles all PDF-specific operations:
//! - Creating XObjects from source pages
//! - Building the output page with cell outlines
//! - Deep copying PDF objects

mod sheet;
mod xobject;

pub use sheet::GridSheet;
pub use xobject::{SourcePage, get_media_box};
