//! Unified error types for the domain layer
//!
//! Every rejected operation returns one of these values and leaves the
//! aggregate it was called on untouched.

use thiserror::Error;

/// Unified error type for roster operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Name is empty (after trimming)
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// Club has no seats left
    #[error("Club is full: {current}/{capacity} seats taken")]
    Full { current: u32, capacity: u32 },

    /// Case-insensitive name collision among members of a club or clubs of a roster
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    /// Event date does not parse to a real calendar date
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// Capacity must be at least one
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(u32),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl DomainError {
    /// Creates an invalid name error.
    ///
    /// # Example
    /// ```ignore
    /// if trimmed.is_empty() {
    ///     return Err(DomainError::invalid_name("Member name cannot be empty"));
    /// }
    /// ```
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    /// Create a club full error
    pub fn full(current: u32, capacity: u32) -> Self {
        Self::Full { current, capacity }
    }

    /// Create a duplicate name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create an invalid date error carrying the rejected input
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate(input.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}
