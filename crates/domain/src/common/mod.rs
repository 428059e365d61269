//! Common utility functions shared across the domain.
//!
//! Pure functions only: no side effects, no I/O, no clock reads.

pub mod datetime;
pub mod string;

pub use datetime::{friendly_when, parse_event_date};
pub use string::{collate, eq_ignore_case, fold_case};
