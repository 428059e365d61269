//! Individual pipeline stages.
//!
//! Each stage takes the clubs that survived the previous stage and the UI
//! state, and returns a new list. Stages never touch the clubs themselves.

use crate::aggregates::Club;
use crate::common::{collate, fold_case};
use crate::view::state::{SortKey, ViewState};

/// One step of the visible-club computation.
pub trait ViewStage: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    fn apply<'a>(&self, clubs: Vec<&'a Club>, state: &ViewState) -> Vec<&'a Club>;
}

/// Keeps clubs whose name contains the search text, ignoring case.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFilter;

impl ViewStage for SearchFilter {
    fn name(&self) -> &'static str {
        "search"
    }

    fn apply<'a>(&self, clubs: Vec<&'a Club>, state: &ViewState) -> Vec<&'a Club> {
        let needle = fold_case(state.search_text.trim());
        if needle.is_empty() {
            return clubs;
        }
        clubs
            .into_iter()
            .filter(|club| club.name().folded().contains(&needle))
            .collect()
    }
}

/// Drops full clubs when "only open" is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenFilter;

impl ViewStage for OpenFilter {
    fn name(&self) -> &'static str {
        "only-open"
    }

    fn apply<'a>(&self, clubs: Vec<&'a Club>, state: &ViewState) -> Vec<&'a Club> {
        if !state.only_open {
            return clubs;
        }
        clubs.into_iter().filter(|club| club.is_open()).collect()
    }
}

/// Stable sort by the selected key.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortStage;

impl ViewStage for SortStage {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn apply<'a>(&self, mut clubs: Vec<&'a Club>, state: &ViewState) -> Vec<&'a Club> {
        match state.sort_key {
            SortKey::NameAsc => {
                clubs.sort_by(|a, b| collate(a.name().as_str(), b.name().as_str()));
            }
            SortKey::NameDesc => {
                clubs.sort_by(|a, b| collate(b.name().as_str(), a.name().as_str()));
            }
            SortKey::SeatsDesc => {
                clubs.sort_by(|a, b| b.seats_left().cmp(&a.seats_left()));
            }
            SortKey::CapacityDesc => {
                clubs.sort_by(|a, b| b.capacity().cmp(&a.capacity()));
            }
            SortKey::Unknown => {}
        }
        clubs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Capacity, ClubName};

    fn club(name: &str, capacity: u32, current: u32) -> Club {
        let mut club = Club::new(ClubName::new(name).unwrap(), Capacity::new(capacity).unwrap());
        for i in 0..current {
            club.add_member(&format!("Member {}", i + 1)).unwrap();
        }
        club
    }

    fn names<'a>(clubs: &[&'a Club]) -> Vec<&'a str> {
        clubs.iter().map(|c| c.name().as_str()).collect()
    }

    fn sample() -> Vec<Club> {
        vec![
            club("Book Club", 12, 2),
            club("Art Club", 8, 8),
            club("Robotics", 6, 5),
        ]
    }

    #[test]
    fn search_passes_through_when_blank() {
        let clubs = sample();
        let state = ViewState::new().with_search_text("   ");
        let out = SearchFilter.apply(clubs.iter().collect(), &state);
        assert_eq!(names(&out), vec!["Book Club", "Art Club", "Robotics"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let clubs = sample();
        let state = ViewState::new().with_search_text(" CLUB ");
        let out = SearchFilter.apply(clubs.iter().collect(), &state);
        assert_eq!(names(&out), vec!["Book Club", "Art Club"]);

        let state = ViewState::new().with_search_text("bot");
        let out = SearchFilter.apply(clubs.iter().collect(), &state);
        assert_eq!(names(&out), vec!["Robotics"]);
    }

    #[test]
    fn open_filter_drops_full_clubs_only_when_set() {
        let clubs = sample();
        let out = OpenFilter.apply(clubs.iter().collect(), &ViewState::new());
        assert_eq!(out.len(), 3);

        let state = ViewState::new().with_only_open(true);
        let out = OpenFilter.apply(clubs.iter().collect(), &state);
        assert_eq!(names(&out), vec!["Book Club", "Robotics"]);
    }

    #[test]
    fn sort_by_name() {
        let clubs = sample();
        let asc = SortStage.apply(clubs.iter().collect(), &ViewState::new());
        assert_eq!(names(&asc), vec!["Art Club", "Book Club", "Robotics"]);

        let state = ViewState::new().with_sort_key(SortKey::NameDesc);
        let desc = SortStage.apply(clubs.iter().collect(), &state);
        assert_eq!(names(&desc), vec!["Robotics", "Book Club", "Art Club"]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let clubs = vec![club("zeta", 1, 0), club("Alpha", 1, 0), club("beta", 1, 0)];
        let out = SortStage.apply(clubs.iter().collect(), &ViewState::new());
        assert_eq!(names(&out), vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn sort_by_seats_and_capacity() {
        let clubs = sample();
        let state = ViewState::new().with_sort_key(SortKey::SeatsDesc);
        let out = SortStage.apply(clubs.iter().collect(), &state);
        assert_eq!(names(&out), vec!["Book Club", "Robotics", "Art Club"]);

        let state = ViewState::new().with_sort_key(SortKey::CapacityDesc);
        let out = SortStage.apply(clubs.iter().collect(), &state);
        assert_eq!(names(&out), vec!["Book Club", "Art Club", "Robotics"]);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let clubs = vec![club("First", 5, 1), club("Second", 9, 5), club("Third", 4, 0)];
        let state = ViewState::new().with_sort_key(SortKey::SeatsDesc);
        let out = SortStage.apply(clubs.iter().collect(), &state);
        assert_eq!(names(&out), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn unknown_sort_key_keeps_order() {
        let clubs = sample();
        let state = ViewState::new().with_sort_key(SortKey::from("popularity"));
        let out = SortStage.apply(clubs.iter().collect(), &state);
        assert_eq!(names(&out), vec!["Book Club", "Art Club", "Robotics"]);
    }
}
