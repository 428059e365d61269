//! Clubroster domain: clubs, their members and events, and the derived
//! club list shown to users.
//!
//! Everything here is synchronous and free of I/O. Time enters either as an
//! explicit `today` argument or, for the convenience accessors, as a read of
//! the local calendar date.

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod seed;
pub mod value_objects;
pub mod view;

pub use aggregates::{Club, Roster};
pub use entities::{Event, Member, NewEvent, RsvpOutcome, DEFAULT_ROLE};
pub use error::DomainError;
pub use ids::{ClubId, EventId, MemberId};
pub use seed::{demo_seeds, ClubSeed, EventSeed};
pub use value_objects::{Capacity, ClubName, MemberName};
pub use view::{compute_visible_clubs, SortKey, ViewPipeline, ViewState};
