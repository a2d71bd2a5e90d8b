use lopdf::{Dictionary, Document, Object, Stream};
use pdf_grid_session::*;
use tokio::sync::mpsc;

fn create_test_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
    let page_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ]),
        ),
        ("Resources", Object::Dictionary(Dictionary::new())),
        ("Contents", Object::Reference(content_id)),
    ]));

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    writer
}

fn items(count: usize) -> Vec<SourceItem> {
    let bytes = create_test_pdf();
    (0..count)
        .map(|i| SourceItem::new(format!("{}.pdf", i), bytes.clone()))
        .collect()
}

#[test]
fn test_add_files_caps_at_nine() {
    let mut session = GridSession::new();

    let ids = session.add_files(items(6)).unwrap();
    assert_eq!(ids.len(), 6);
    assert_eq!(session.remaining_slots(), 3);

    let ids = session.add_files(items(5)).unwrap();
    assert_eq!(ids.len(), 3);
    assert_eq!(session.files().len(), 9);

    assert!(matches!(
        session.add_files(items(1)),
        Err(SessionError::Full)
    ));
    assert_eq!(session.files().len(), 9);
}

#[test]
fn test_ids_are_unique_and_removal_keeps_order() {
    let mut session = GridSession::new();
    let ids = session.add_files(items(3)).unwrap();
    assert_ne!(ids[0], ids[1]);

    assert!(session.remove(ids[1]));
    assert!(!session.remove(ids[1]));

    let names: Vec<&str> = session
        .files()
        .iter()
        .map(|file| file.item.name.as_str())
        .collect();
    assert_eq!(names, vec!["0.pdf", "2.pdf"]);

    // New ids are never reused
    let new_ids = session.add_files(items(1)).unwrap();
    assert!(!ids.contains(&new_ids[0]));
}

#[tokio::test]
async fn test_generate_without_files_leaves_state_alone() {
    let mut session = GridSession::new();
    assert!(matches!(
        session.generate().await,
        Err(SessionError::NoFiles)
    ));
    assert_eq!(session.status(), ProcessingStatus::Idle);
    assert!(!session.has_artifact());
}

#[tokio::test]
async fn test_generate_and_take_artifact_once() {
    let mut session = GridSession::new();
    session.add_files(items(4)).unwrap();

    let stats = session.generate().await.unwrap();
    assert_eq!(stats.placed, 4);
    assert_eq!(stats.empty, 5);
    assert_eq!(session.status(), ProcessingStatus::Complete);

    let artifact = session.take_artifact().unwrap();
    assert_eq!(artifact.file_name, "grid-layout.pdf");
    assert!(artifact.grid.pdf.starts_with(b"%PDF"));

    assert!(session.take_artifact().is_none());
    assert_eq!(session.status(), ProcessingStatus::Complete);
}

#[tokio::test]
async fn test_corrupt_file_does_not_fail_the_session() {
    let mut session = GridSession::new();
    let mut batch = items(2);
    batch.push(SourceItem::new("bad.pdf", b"garbage".to_vec()));
    session.add_files(batch).unwrap();

    let stats = session.generate().await.unwrap();
    assert_eq!(stats.placed, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(session.status(), ProcessingStatus::Complete);
}

#[tokio::test]
async fn test_mutation_discards_artifact() {
    let mut session = GridSession::new();
    let ids = session.add_files(items(2)).unwrap();
    session.generate().await.unwrap();
    assert!(session.has_artifact());

    session.remove(ids[0]);
    assert_eq!(session.status(), ProcessingStatus::Idle);
    assert!(!session.has_artifact());

    session.generate().await.unwrap();
    session.add_files(items(1)).unwrap();
    assert_eq!(session.status(), ProcessingStatus::Idle);
    assert!(!session.has_artifact());

    session.generate().await.unwrap();
    session.clear();
    assert_eq!(session.status(), ProcessingStatus::Idle);
    assert!(session.files().is_empty());
    assert!(!session.has_artifact());
}

#[tokio::test]
async fn test_config_change_discards_artifact() {
    let mut session = GridSession::new();
    session.add_files(items(1)).unwrap();
    session.generate().await.unwrap();

    // Same config is not a change
    session.set_config(SheetConfig::default());
    assert!(session.has_artifact());

    session.set_config(SheetConfig {
        show_borders: false,
        ..Default::default()
    });
    assert!(!session.has_artifact());
    assert_eq!(session.status(), ProcessingStatus::Idle);
}

#[test]
fn test_file_name() {
    let mut session = GridSession::new();
    assert_eq!(session.file_name(), "grid-layout.pdf");

    session.set_export_name("handouts");
    assert_eq!(session.file_name(), "handouts.pdf");

    session.set_export_name("handouts.pdf");
    assert_eq!(session.file_name(), "handouts.pdf");

    session.set_export_name("   ");
    assert_eq!(session.file_name(), "grid-layout.pdf");
}

#[test]
fn test_snapshot_is_independent() {
    let mut session = GridSession::new();
    session.add_files(items(2)).unwrap();
    let snapshot = session.snapshot();

    session.clear();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[1].name, "1.pdf");
}

#[tokio::test]
async fn test_worker_round_trip() {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(command_rx, update_tx));

    command_tx
        .send(GridCommand::AddFiles { items: items(3) })
        .unwrap();
    command_tx
        .send(GridCommand::SetExportName {
            name: "sheet".to_string(),
        })
        .unwrap();
    command_tx.send(GridCommand::Generate).unwrap();
    command_tx.send(GridCommand::TakeArtifact).unwrap();
    command_tx.send(GridCommand::TakeArtifact).unwrap();
    drop(command_tx);
    worker.await.unwrap();

    let mut updates = Vec::new();
    while let Ok(update) = update_rx.try_recv() {
        updates.push(update);
    }

    assert!(matches!(
        &updates[0],
        GridUpdate::FilesChanged { files } if files.len() == 3
    ));
    assert!(updates.iter().any(|u| matches!(
        u,
        GridUpdate::StatusChanged {
            status: ProcessingStatus::Processing
        }
    )));
    assert!(updates.iter().any(|u| matches!(
        u,
        GridUpdate::Generated { file_name, stats } if file_name == "sheet.pdf" && stats.placed == 3
    )));

    let artifacts = updates
        .iter()
        .filter(|u| matches!(u, GridUpdate::Artifact { .. }))
        .count();
    assert_eq!(artifacts, 1);
    assert!(matches!(updates.last(), Some(GridUpdate::NoArtifact)));
}

#[tokio::test]
async fn test_worker_reports_errors() {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(command_rx, update_tx));

    command_tx.send(GridCommand::Generate).unwrap();
    command_tx
        .send(GridCommand::SetConfig {
            config: SheetConfig {
                margin_pt: -5.0,
                ..Default::default()
            },
        })
        .unwrap();
    drop(command_tx);
    worker.await.unwrap();

    let mut errors = 0;
    while let Ok(update) = update_rx.try_recv() {
        if let GridUpdate::Error { .. } = update {
            errors += 1;
        }
    }
    assert_eq!(errors, 2);
}
