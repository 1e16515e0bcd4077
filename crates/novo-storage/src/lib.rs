//! novo-storage
//!
//! Durable archive of completed submissions. Filesystem-backed, one JSON
//! document per submission. Archival is fire-and-forget from the
//! reporting path: a failure here is logged and swallowed, never shown
//! to the respondent.

pub mod error;
pub mod keys;
pub mod store;
