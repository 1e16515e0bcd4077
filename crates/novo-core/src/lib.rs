//! novo-core
//!
//! Pure domain types for the Novo student screening system. No I/O — this
//! is the shared vocabulary between the screening engine, the submission
//! archive, and the frontends.

pub mod error;
pub mod models;
