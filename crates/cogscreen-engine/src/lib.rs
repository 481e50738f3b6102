//! cogscreen-engine
//!
//! The screening engine: the weighted question bank, role-aware filtering,
//! the step-by-step answer session, and deterministic scoring into a
//! [`Report`](cogscreen_core::models::report::Report). Synchronous and
//! in-memory; no I/O apart from optional bank file loading.
//!
//! Results categorize a level of risk for educational triage. They are never
//! a diagnosis.

pub mod bank;
pub mod error;
pub mod scoring;
pub mod session;

pub use bank::{Question, QuestionBank};
pub use error::{BankError, ScreeningError};
pub use scoring::{score, score_at};
pub use session::{Session, SessionState, Step};
