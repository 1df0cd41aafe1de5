use std::{fs::File, io::Write, path::PathBuf};

use tempdir::TempDir;
use uuid::Uuid;

use catalog_record::{FileKind, FileRecord, PendingFile, RecordId};

use crate::{demo_records, Catalog, PendingSelection};

fn demo(name: &str, size: &str, kind: FileKind) -> FileRecord {
    FileRecord::demo(name, size, kind, "placeholder")
}

fn create_file_at(dir: &TempDir, name: &str, len: usize) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).expect("Could not create temp file");
    file.write_all(&vec![0u8; len])
        .expect("Could not write temp file");
    path
}

// catalog mutation

#[test]
fn seed_replaces_catalog_wholesale() {
    let mut catalog = Catalog::new();
    catalog.append(vec![demo("old.txt", "1 KB", FileKind::Text)]);

    catalog.seed(demo_records());

    assert_eq!(catalog.count(), 4);
    assert_eq!(catalog.records()[0].name(), "Welcome Document.pdf");
    assert_eq!(catalog.records()[2].kind(), FileKind::Text);
}

#[test]
fn append_preserves_input_order() {
    let mut catalog = Catalog::new();
    catalog.append(vec![
        demo("a.pdf", "1 KB", FileKind::Pdf),
        demo("b.jpg", "2 KB", FileKind::Image),
    ]);
    catalog.append(vec![demo("c.zip", "3 KB", FileKind::Archive)]);

    let names: Vec<&str> = catalog
        .records()
        .iter()
        .map(|r| r.name())
        .collect();
    assert_eq!(names, vec!["a.pdf", "b.jpg", "c.zip"]);
}

#[test]
fn append_assigns_fresh_unique_ids() {
    let mut catalog = Catalog::new();
    catalog.append(vec![
        demo("same.txt", "1 KB", FileKind::Text),
        demo("same.txt", "1 KB", FileKind::Text),
    ]);

    // Identical names are distinct records with distinct ids.
    assert_eq!(catalog.count(), 2);
    let first = catalog.records()[0].id();
    let second = catalog.records()[1].id();
    assert_ne!(first, second);
    assert_eq!(catalog.find(&first).unwrap().name(), "same.txt");
}

#[test]
fn remove_then_find_yields_nothing() {
    let mut catalog = Catalog::new();
    catalog.seed(demo_records());
    let id = catalog.records()[1].id();

    let removed = catalog.remove(&id).unwrap();

    assert_eq!(removed.name(), "Sample Image.jpg");
    assert_eq!(catalog.count(), 3);
    assert!(catalog.find(&id).is_none());
}

#[test]
fn remove_preserves_order_of_survivors() {
    let mut catalog = Catalog::new();
    catalog.seed(demo_records());
    let id = catalog.records()[1].id();

    catalog.remove(&id).unwrap();

    let names: Vec<&str> = catalog
        .records()
        .iter()
        .map(|r| r.name())
        .collect();
    assert_eq!(
        names,
        vec!["Welcome Document.pdf", "Instructions.txt", "Archive.zip"]
    );
}

#[test]
fn remove_unknown_id_leaves_catalog_unchanged() {
    let mut catalog = Catalog::new();
    catalog.seed(demo_records());

    let unknown = RecordId::generate();
    let result = catalog.remove(&unknown);

    assert!(result.is_err());
    assert_eq!(catalog.count(), 4);
}

#[test]
fn find_on_empty_catalog_yields_nothing() {
    let catalog = Catalog::new();
    assert!(catalog.find(&RecordId::generate()).is_none());
    assert!(catalog.is_empty());
}

// pending selection

#[test]
fn selection_is_replaced_wholesale() {
    let dir = TempDir::new(&Uuid::new_v4().to_string()).unwrap();
    let first = create_file_at(&dir, "first.txt", 10);
    let second = create_file_at(&dir, "second.png", 20);

    let mut selection = PendingSelection::new();
    selection.replace(vec![PendingFile::from_path(&first).unwrap()]);
    assert_eq!(selection.len(), 1);

    selection.replace(vec![
        PendingFile::from_path(&first).unwrap(),
        PendingFile::from_path(&second).unwrap(),
    ]);

    // A new pick does not merge with the previous one.
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.files()[1].name(), "second.png");
    assert_eq!(selection.files()[1].len(), 20);
}

#[test]
fn take_drains_the_selection() {
    let dir = TempDir::new(&Uuid::new_v4().to_string()).unwrap();
    let path = create_file_at(&dir, "staged.txt", 5);

    let mut selection = PendingSelection::new();
    selection.replace(vec![PendingFile::from_path(&path).unwrap()]);

    let taken = selection.take();

    assert_eq!(taken.len(), 1);
    assert!(selection.is_empty());
}

#[test]
fn clear_discards_without_uploading() {
    let dir = TempDir::new(&Uuid::new_v4().to_string()).unwrap();
    let path = create_file_at(&dir, "staged.txt", 5);

    let mut selection = PendingSelection::new();
    selection.replace(vec![PendingFile::from_path(&path).unwrap()]);
    selection.clear();

    assert!(selection.is_empty());
}

#[test]
fn staging_a_directory_is_rejected() {
    let dir = TempDir::new(&Uuid::new_v4().to_string()).unwrap();
    assert!(PendingFile::from_path(dir.path()).is_err());
}

// upload conversion

#[test]
fn uploaded_record_keeps_source_handle() {
    let dir = TempDir::new(&Uuid::new_v4().to_string()).unwrap();
    let path = create_file_at(&dir, "notes.txt", 2048);

    let pending = PendingFile::from_path(&path).unwrap();
    let record = FileRecord::from_pending(&pending);

    assert_eq!(record.name(), "notes.txt");
    assert_eq!(record.size(), "2.0 KB");
    assert_eq!(record.kind(), FileKind::Document);
    assert_eq!(record.source(), Some(path.as_path()));
    assert!(record.content().is_none());
}
