//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{eq_ignore_case, fold_case};
use crate::error::DomainError;

// ============================================================================
// MemberName
// ============================================================================

/// A validated member name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberName(String);

impl MemberName {
    /// Create a new validated member name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_name("Member name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the names match ignoring case.
    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.0, other.trim())
    }

    /// Case-folded form used for substring search.
    pub fn folded(&self) -> String {
        fold_case(&self.0)
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MemberName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<MemberName> for String {
    fn from(name: MemberName) -> String {
        name.0
    }
}

// ============================================================================
// ClubName
// ============================================================================

/// A validated club name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClubName(String);

impl ClubName {
    /// Create a new validated club name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_name("Club name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the names match ignoring case.
    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.0, other.trim())
    }

    /// Case-folded form used for substring search.
    pub fn folded(&self) -> String {
        fold_case(&self.0)
    }
}

impl fmt::Display for ClubName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ClubName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ClubName> for String {
    fn from(name: ClubName) -> String {
        name.0
    }
}
