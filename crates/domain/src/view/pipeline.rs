//! The visible-club pipeline: snapshot, then each stage in order.

use crate::aggregates::{Club, Roster};
use crate::view::stages::{OpenFilter, SearchFilter, SortStage, ViewStage};
use crate::view::state::ViewState;

/// Ordered list of stages turning a roster into the clubs to display.
pub struct ViewPipeline {
    stages: Vec<Box<dyn ViewStage>>,
}

impl ViewPipeline {
    /// An empty pipeline: returns the roster's clubs in canonical order.
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Search, then only-open, then sort.
    pub fn standard() -> Self {
        Self::empty()
            .with_stage(SearchFilter)
            .with_stage(OpenFilter)
            .with_stage(SortStage)
    }

    pub fn with_stage(mut self, stage: impl ViewStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Stage names in application order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage over a snapshot of the roster's clubs.
    ///
    /// The roster itself is never reordered; the result borrows the same clubs.
    pub fn run<'a>(&self, roster: &'a Roster, state: &ViewState) -> Vec<&'a Club> {
        let snapshot: Vec<&Club> = roster.clubs().iter().collect();
        self.stages
            .iter()
            .fold(snapshot, |clubs, stage| stage.apply(clubs, state))
    }
}

impl Default for ViewPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for ViewPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewPipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Clubs to display for the given UI state, using the standard pipeline.
///
/// # Example
///
/// ```
/// use clubroster_domain::aggregates::Roster;
/// use clubroster_domain::view::{compute_visible_clubs, SortKey, ViewState};
///
/// let mut roster = Roster::new();
/// roster.add("Robotics", 6).unwrap();
/// roster.add("Art Club", 8).unwrap();
///
/// let state = ViewState::new().with_sort_key(SortKey::NameAsc);
/// let names: Vec<&str> = compute_visible_clubs(&roster, &state)
///     .iter()
///     .map(|c| c.name().as_str())
///     .collect();
/// assert_eq!(names, vec!["Art Club", "Robotics"]);
/// ```
pub fn compute_visible_clubs<'a>(roster: &'a Roster, state: &ViewState) -> Vec<&'a Club> {
    ViewPipeline::standard().run(roster, state)
}
