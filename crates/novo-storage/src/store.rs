use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use uuid::Uuid;

use novo_core::models::submission::Submission;

use crate::error::StorageError;
use crate::keys;

/// Filesystem-backed submission archive.
#[derive(Debug, Clone)]
pub struct SubmissionStore {
    root: PathBuf,
}

impl SubmissionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Append one submission to the archive as a pretty-printed JSON
    /// document under its canonical key.
    pub fn append(&self, submission: &Submission) -> Result<(), StorageError> {
        let key = keys::submission(submission.id);
        let path = self.root.join(&key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write {
                key: key.clone(),
                source: e,
            })?;
        }
        let body = serde_json::to_vec_pretty(submission)?;
        fs::write(&path, body).map_err(|e| StorageError::Write { key, source: e })?;
        Ok(())
    }

    /// Load a submission back. The engine never reads the archive; this
    /// exists for operators and tests.
    pub fn load(&self, id: Uuid) -> Result<Submission, StorageError> {
        let key = keys::submission(id);
        let path = self.root.join(&key);
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound { key });
            }
            Err(e) => return Err(StorageError::Read { key, source: e }),
        };
        Ok(serde_json::from_slice(&contents)?)
    }
}

/// Archive a submission without letting failure reach the reporting
/// path. Errors are logged and dropped; the respondent still sees their
/// report.
pub fn archive_fire_and_forget(store: &SubmissionStore, submission: &Submission) {
    match store.append(submission) {
        Ok(()) => info!(submission.id = %submission.id, "submission archived"),
        Err(e) => warn!(
            submission.id = %submission.id,
            error = %e,
            "failed to archive submission"
        ),
    }
}
