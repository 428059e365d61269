//! Derived club list: search → only-open → sort.
//!
//! Pure functions of a `Roster` and a `ViewState`. Nothing here mutates a club.

pub mod pipeline;
pub mod stages;
pub mod state;

pub use pipeline::{compute_visible_clubs, ViewPipeline};
pub use stages::{OpenFilter, SearchFilter, SortStage, ViewStage};
pub use state::{SortKey, ViewState};
