//! Value objects: validated, immutable building blocks of the entities.

pub mod capacity;
pub mod names;

pub use capacity::Capacity;
pub use names::{ClubName, MemberName};
