use pdf_grid::{GridStatistics, SheetConfig, SourceItem};
use tokio::sync::mpsc;

use crate::session::{Artifact, FileId, GridSession, ProcessingStatus};

/// Commands sent from the caller to the worker
#[derive(Debug)]
pub enum GridCommand {
    AddFiles { items: Vec<SourceItem> },
    Remove { id: FileId },
    Clear,
    SetConfig { config: SheetConfig },
    SetExportName { name: String },
    Generate,
    TakeArtifact,
}

/// Updates sent from the worker to the caller
#[derive(Debug, Clone)]
pub enum GridUpdate {
    /// The pending files after a change: (id, name, size in bytes)
    FilesChanged { files: Vec<(FileId, String, usize)> },
    StatusChanged { status: ProcessingStatus },
    Generated { file_name: String, stats: GridStatistics },
    Artifact { artifact: Artifact },
    NoArtifact,
    Error { message: String },
}

/// Worker task that owns a session and processes commands until the
/// command channel closes.
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<GridCommand>,
    update_tx: mpsc::UnboundedSender<GridUpdate>,
) {
    let mut session = GridSession::new();

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut session, &update_tx).await;
    }

    log::debug!("Grid worker shutting down");
}

async fn process_command(
    cmd: GridCommand,
    session: &mut GridSession,
    update_tx: &mpsc::UnboundedSender<GridUpdate>,
) {
    let status_before = session.status();
    let mut generated = false;

    match cmd {
        GridCommand::AddFiles { items } => match session.add_files(items) {
            Ok(_) => send_files(session, update_tx),
            Err(e) => send_error(update_tx, e.to_string()),
        },
        GridCommand::Remove { id } => {
            if session.remove(id) {
                send_files(session, update_tx);
            }
        }
        GridCommand::Clear => {
            session.clear();
            send_files(session, update_tx);
        }
        GridCommand::SetConfig { config } => {
            if let Err(e) = config.validate() {
                send_error(update_tx, e.to_string());
            } else {
                session.set_config(config);
            }
        }
        GridCommand::SetExportName { name } => session.set_export_name(name),
        GridCommand::Generate => {
            if session.files().is_empty() {
                send_error(update_tx, crate::SessionError::NoFiles.to_string());
            } else {
                let _ = update_tx.send(GridUpdate::StatusChanged {
                    status: ProcessingStatus::Processing,
                });
                generated = true;
                match session.generate().await {
                    Ok(stats) => {
                        let _ = update_tx.send(GridUpdate::Generated {
                            file_name: session.file_name(),
                            stats,
                        });
                    }
                    Err(e) => send_error(update_tx, e.to_string()),
                }
            }
        }
        GridCommand::TakeArtifact => {
            let update = match session.take_artifact() {
                Some(artifact) => GridUpdate::Artifact { artifact },
                None => GridUpdate::NoArtifact,
            };
            let _ = update_tx.send(update);
        }
    }

    if generated || session.status() != status_before {
        let _ = update_tx.send(GridUpdate::StatusChanged {
            status: session.status(),
        });
    }
}

fn send_files(session: &GridSession, update_tx: &mpsc::UnboundedSender<GridUpdate>) {
    let files = session
        .files()
        .iter()
        .map(|file| (file.id, file.item.name.clone(), file.item.size()))
        .collect();
    let _ = update_tx.send(GridUpdate::FilesChanged { files });
}

fn send_error(update_tx: &mpsc::UnboundedSender<GridUpdate>, message: String) {
    log::warn!("{}", message);
    let _ = update_tx.send(GridUpdate::Error { message });
}
