//! Archive path conventions.
//!
//! Pure string functions defining the canonical layout under the archive
//! root.

use uuid::Uuid;

pub const SUBMISSIONS_PREFIX: &str = "submissions/";

pub fn submission(id: Uuid) -> String {
    format!("submissions/{id}.json")
}
