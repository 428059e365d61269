//! Infrastructure implementations.
//!
//! Port traits, their production adapters, and start-up plumbing.

pub mod clock;
pub mod console;
pub mod error;
pub mod ports;
pub mod seeds;
pub mod settings;
