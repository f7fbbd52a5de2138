//! Record domain model.
//!
//! # Responsibility
//! - Define the canonical three-field record and its stored line form.
//! - Define structured requests that commands consume.
//!
//! # Invariants
//! - Stored lines are produced only by the formatting helpers in `record`.

pub mod record;
