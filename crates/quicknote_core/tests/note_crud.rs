use quicknote_core::{FileNoteRepository, NoteDraft, NoteService};
use std::collections::HashSet;
use tempfile::TempDir;
use uuid::Uuid;

fn service_in(dir: &TempDir) -> NoteService<FileNoteRepository> {
    NoteService::new(FileNoteRepository::new(dir.path().join("db.json")))
}

fn draft(title: &str, text: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        text: text.to_string(),
    }
}

#[test]
fn empty_store_lists_no_notes() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);
    assert!(service.list_notes().unwrap().is_empty());
}

#[test]
fn every_created_note_gets_a_distinct_id() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let mut seen = HashSet::new();
    for n in 0..20 {
        let created = service
            .create_note(&draft(&format!("note {n}"), "body"))
            .unwrap();
        assert!(seen.insert(created.id), "id {} issued twice", created.id);
    }
}

#[test]
fn created_note_appears_exactly_once_with_submitted_fields() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    service.create_note(&draft("existing", "older")).unwrap();
    let created = service.create_note(&draft("groceries", "milk")).unwrap();

    let listed = service.list_notes().unwrap();
    let matches: Vec<_> = listed.iter().filter(|n| n.id == created.id).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "groceries");
    assert_eq!(matches[0].text, "milk");
}

#[test]
fn list_order_is_append_order() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let first = service.create_note(&draft("first", "1")).unwrap();
    let second = service.create_note(&draft("second", "2")).unwrap();
    let third = service.create_note(&draft("third", "3")).unwrap();

    let ids: Vec<_> = service.list_notes().unwrap().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[test]
fn delete_removes_only_the_target_note() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let keep_a = service.create_note(&draft("keep a", "a")).unwrap();
    let victim = service.create_note(&draft("victim", "v")).unwrap();
    let keep_b = service.create_note(&draft("keep b", "b")).unwrap();

    assert!(service.delete_note(victim.id).unwrap());

    let listed = service.list_notes().unwrap();
    assert_eq!(listed, vec![keep_a, keep_b]);
}

#[test]
fn delete_of_unknown_id_is_a_tolerated_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let kept = service.create_note(&draft("kept", "body")).unwrap();

    let removed = service.delete_note(Uuid::new_v4()).unwrap();
    assert!(!removed);
    assert_eq!(service.list_notes().unwrap(), vec![kept]);
}

#[test]
fn notes_survive_a_fresh_repository_over_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    let created = {
        let service = NoteService::new(FileNoteRepository::new(&path));
        service.create_note(&draft("durable", "still here")).unwrap()
    };

    // New repository instance, as after a process restart.
    let service = NoteService::new(FileNoteRepository::new(&path));
    assert_eq!(service.list_notes().unwrap(), vec![created]);
}

#[test]
fn count_notes_tracks_creates_and_deletes() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    assert_eq!(service.count_notes().unwrap(), 0);
    let created = service.create_note(&draft("one", "1")).unwrap();
    service.create_note(&draft("two", "2")).unwrap();
    assert_eq!(service.count_notes().unwrap(), 2);

    service.delete_note(created.id).unwrap();
    assert_eq!(service.count_notes().unwrap(), 1);
}
