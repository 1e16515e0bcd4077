//! novo-screening
//!
//! The scoring and risk-classification engine for the student
//! questionnaire. Pure data and pure functions — no I/O. The frontend
//! collects answers and owns the session lifecycle; everything here
//! completes synchronously.

pub mod bank;
pub mod error;
pub mod recommend;
pub mod risk;
pub mod scoring;
pub mod session;
