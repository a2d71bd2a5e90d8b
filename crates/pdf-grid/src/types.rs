use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Failed to serialize grid document: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Why a single slot could not be drawn.
///
/// These never abort a generation; the slot gets an error outline instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlotError {
    #[error("could not decode source: {0}")]
    Decode(String),
    #[error("source is encrypted")]
    Encrypted,
    #[error("source has no pages")]
    NoPages,
    #[error("cell has no drawable area ({width} x {height} pt)")]
    DegenerateCell { width: f32, height: f32 },
    #[error("source page has no usable size ({width} x {height} pt)")]
    DegeneratePage { width: f32, height: f32 },
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes for the output sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// One caller-supplied source document.
///
/// Only the first page is ever used. The bytes are shared, so cloning an
/// item (or a whole snapshot of items) does not copy the PDF data.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceItem {
    /// Display name, used in logs and reports only
    pub name: String,
    /// Raw PDF bytes
    pub bytes: Arc<[u8]>,
}

impl SourceItem {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Size of the source in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
