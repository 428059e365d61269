//! Process-unique identifiers.
//!
//! Identifiers are opaque strings of the form `{prefix}_{n}`. The counter is
//! shared by every prefix, so ids never collide across entity kinds either.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a new identifier, unique for the lifetime of the process.
///
/// The prefix is only there to make ids readable in logs and renders.
///
/// # Examples
///
/// ```
/// use clubroster_domain::ids;
///
/// let a = ids::next("m");
/// let b = ids::next("m");
/// assert!(a.starts_with("m_"));
/// assert_ne!(a, b);
/// ```
pub fn next(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{n}")
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            pub fn new() -> Self {
                Self(next(Self::PREFIX))
            }

            /// Wraps an existing identifier string (e.g. one echoed back by a renderer).
            pub fn from_string(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ClubId, "c");
define_id!(MemberId, "m");
define_id!(EventId, "e");
