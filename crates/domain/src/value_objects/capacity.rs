//! Capacity value object for clubs and events

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A positive seat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Capacity(u32);

impl Capacity {
    /// Default capacity of a newly scheduled event.
    pub const DEFAULT_EVENT: Capacity = Capacity(100);

    /// # Errors
    ///
    /// Returns `DomainError::InvalidCapacity` for zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidCapacity(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Seats left once `taken` seats are used, never negative.
    pub fn remaining(self, taken: u32) -> u32 {
        self.0.saturating_sub(taken)
    }

    /// Share of seats taken, as a whole percentage rounded half up.
    pub fn percent_taken(self, taken: u32) -> u32 {
        let taken = u64::from(taken);
        let total = u64::from(self.0);
        // Integer form of round(100 * taken / total)
        ((taken * 200 + total) / (total * 2)) as u32
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Capacity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Capacity> for u32 {
    fn from(value: Capacity) -> Self {
        value.0
    }
}
