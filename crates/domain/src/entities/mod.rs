//! Entities owned by a club aggregate.

pub mod event;
pub mod member;

pub use event::{Event, NewEvent, RsvpOutcome};
pub use member::{Member, DEFAULT_ROLE};
