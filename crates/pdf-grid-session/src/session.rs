use crate::SessionError;
use pdf_grid::{GeneratedGrid, GridStatistics, MAX_ITEMS, SheetConfig, SourceItem};

/// Export name used when the caller has not picked one
pub const DEFAULT_EXPORT_NAME: &str = "grid-layout";

/// Extension appended to every export name
const EXPORT_EXTENSION: &str = ".pdf";

/// Handle to a pending file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(pub u64);

/// A pending source file
#[derive(Debug, Clone, PartialEq)]
pub struct GridFile {
    pub id: FileId,
    pub item: SourceItem,
}

/// Status of the current generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    #[default]
    Idle,
    Processing,
    Complete,
    Error,
}

/// A generated sheet waiting to be picked up
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Suggested file name, including the extension
    pub file_name: String,
    pub grid: GeneratedGrid,
}

/// Pending files, status and the last artifact of one caller.
///
/// Any change to the pending files or the configuration drops the artifact
/// and returns the session to [`ProcessingStatus::Idle`].
#[derive(Debug, Default)]
pub struct GridSession {
    files: Vec<GridFile>,
    status: ProcessingStatus,
    config: SheetConfig,
    export_name: String,
    artifact: Option<Artifact>,
    last_error: Option<String>,
    next_id: u64,
}

impl GridSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SheetConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn files(&self) -> &[GridFile] {
        &self.files
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Message of the last failed generation, if the session is in `Error`
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Free slots left on the sheet
    pub fn remaining_slots(&self) -> usize {
        MAX_ITEMS - self.files.len()
    }

    /// Add files in order, as many as fit.
    ///
    /// Returns the ids of the files that were added. Fails without touching
    /// the session when no slot is free.
    pub fn add_files(
        &mut self,
        items: impl IntoIterator<Item = SourceItem>,
    ) -> Result<Vec<FileId>, SessionError> {
        if self.files.len() >= MAX_ITEMS {
            return Err(SessionError::Full);
        }

        let mut ids = Vec::new();
        let mut skipped = 0;
        for item in items {
            if self.files.len() >= MAX_ITEMS {
                skipped += 1;
                continue;
            }
            let id = FileId(self.next_id);
            self.next_id += 1;
            self.files.push(GridFile { id, item });
            ids.push(id);
        }

        if skipped > 0 {
            log::warn!("Sheet is full, {} file(s) were not added", skipped);
        }

        self.reset();
        Ok(ids)
    }

    /// Remove a pending file. Returns false if no file has this id.
    pub fn remove(&mut self, id: FileId) -> bool {
        let before = self.files.len();
        self.files.retain(|file| file.id != id);
        let removed = self.files.len() != before;
        if removed {
            self.reset();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.reset();
    }

    pub fn set_config(&mut self, config: SheetConfig) {
        if config != self.config {
            self.config = config;
            self.reset();
        }
    }

    pub fn set_export_name(&mut self, name: impl Into<String>) {
        self.export_name = name.into();
    }

    /// File name the artifact should be saved under.
    ///
    /// The extension is fixed; a trailing `.pdf` typed by the user is not
    /// doubled.
    pub fn file_name(&self) -> String {
        let name = self.export_name.trim();
        let base = name.strip_suffix(EXPORT_EXTENSION).unwrap_or(name).trim();
        let base = if base.is_empty() {
            DEFAULT_EXPORT_NAME
        } else {
            base
        };
        format!("{}{}", base, EXPORT_EXTENSION)
    }

    /// Immutable copy of the pending items, in slot order
    pub fn snapshot(&self) -> Vec<SourceItem> {
        self.files.iter().map(|file| file.item.clone()).collect()
    }

    /// Generate a sheet from the pending files.
    ///
    /// With no pending files this is a no-op that returns
    /// [`SessionError::NoFiles`]. Otherwise the session ends up `Complete`
    /// with a fresh artifact, or `Error` with none.
    pub async fn generate(&mut self) -> Result<GridStatistics, SessionError> {
        if self.files.is_empty() {
            return Err(SessionError::NoFiles);
        }

        self.artifact = None;
        self.last_error = None;
        self.status = ProcessingStatus::Processing;

        let items = self.snapshot();
        match pdf_grid::generate(&items, &self.config).await {
            Ok(grid) => {
                let stats = grid.statistics();
                self.artifact = Some(Artifact {
                    file_name: self.file_name(),
                    grid,
                });
                self.status = ProcessingStatus::Complete;
                Ok(stats)
            }
            Err(e) => {
                log::error!("Grid generation failed: {}", e);
                self.last_error = Some(e.to_string());
                self.status = ProcessingStatus::Error;
                Err(e.into())
            }
        }
    }

    pub fn has_artifact(&self) -> bool {
        self.artifact.is_some()
    }

    /// Hand out the generated artifact. Only the first call gets it.
    pub fn take_artifact(&mut self) -> Option<Artifact> {
        self.artifact.take()
    }

    fn reset(&mut self) {
        if self.artifact.take().is_some() {
            log::debug!("Discarding generated sheet after pending files changed");
        }
        self.last_error = None;
        self.status = ProcessingStatus::Idle;
    }
}
