//! UI state consumed by the view pipeline.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordering applied to the visible club list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name, A to Z.
    #[default]
    NameAsc,
    /// Name, Z to A.
    NameDesc,
    /// Most seats left first.
    SeatsDesc,
    /// Largest capacity first.
    CapacityDesc,

    /// Unrecognized key; leaves the order unchanged.
    #[serde(other)]
    Unknown,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::SeatsDesc => "seats-desc",
            SortKey::CapacityDesc => "capacity-desc",
            SortKey::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "seats-desc" => SortKey::SeatsDesc,
            "capacity-desc" => SortKey::CapacityDesc,
            _ => SortKey::Unknown,
        })
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }
}

/// Snapshot of the toolbar: search box, "only open" checkbox, sort selector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub search_text: String,
    pub only_open: bool,
    pub sort_key: SortKey,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    pub fn with_only_open(mut self, only_open: bool) -> Self {
        self.only_open = only_open;
        self
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}
