//! cogscreen-core
//!
//! Pure domain types for the screening engine: domains, respondent roles,
//! answer values, and the report contract handed to downstream consumers.
//! No scoring logic lives here.

pub mod error;
pub mod models;
