//! novo-cli
//!
//! Terminal frontend for the Novo screening questionnaire. Owns the
//! session lifecycle and all I/O; the engine crates stay pure.

pub mod form;
