use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use novo_core::models::category::Cohort;
use novo_core::models::submission::Submission;
use novo_storage::error::StorageError;
use novo_storage::keys;
use novo_storage::store::{self, SubmissionStore};

fn temp_root(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("novo-store-{tag}-{nanos}"))
}

#[test]
fn submission_key_layout() {
    let id = uuid::Uuid::new_v4();
    let key = keys::submission(id);
    assert!(key.starts_with(keys::SUBMISSIONS_PREFIX));
    assert!(key.ends_with(".json"));
    assert!(key.contains(&id.to_string()));
}

#[test]
fn append_then_load_round_trips_the_record() {
    let store = SubmissionStore::new(temp_root("roundtrip"));
    let submission = Submission::new("Taylor", Cohort::Girl, vec![0, 6, 3, 2]);

    store.append(&submission).unwrap();
    let loaded = store.load(submission.id).unwrap();

    assert_eq!(loaded.id, submission.id);
    assert_eq!(loaded.respondent_name, "Taylor");
    assert_eq!(loaded.cohort, Cohort::Girl);
    assert_eq!(loaded.responses, vec![0, 6, 3, 2]);
    assert_eq!(loaded.submitted_at, submission.submitted_at);
}

#[test]
fn loading_a_missing_submission_is_not_found() {
    let store = SubmissionStore::new(temp_root("missing"));
    match store.load(uuid::Uuid::new_v4()) {
        Err(StorageError::NotFound { key }) => {
            assert!(key.starts_with(keys::SUBMISSIONS_PREFIX));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn archive_fire_and_forget_swallows_write_failures() {
    // Root under a regular file: directory creation must fail, and the
    // failure must not escape.
    let blocker = temp_root("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let store = SubmissionStore::new(blocker.join("archive"));

    let submission = Submission::new("Sam", Cohort::Unspecified, vec![1, 2, 3]);
    store::archive_fire_and_forget(&store, &submission);
}
