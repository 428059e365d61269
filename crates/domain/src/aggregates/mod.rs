//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//!
//! `Roster` owns `Club`s; a `Club` owns its `Member`s and `Event`s. Nothing
//! else holds a mutable path to them.

pub mod club;
pub mod roster;

pub use club::Club;
pub use roster::Roster;
