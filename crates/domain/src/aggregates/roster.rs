//! Roster - the top-level collection of clubs
//!
//! Clubs keep insertion order; an id index makes lookup O(1).

use std::collections::HashMap;

use crate::aggregates::Club;
use crate::error::DomainError;
use crate::ids::ClubId;
use crate::value_objects::{Capacity, ClubName};

/// All clubs known to the application.
///
/// # Invariants
///
/// - club names are unique ignoring case
/// - `index[id]` is the position of that club in `clubs`
#[derive(Debug, Clone, Default)]
pub struct Roster {
    clubs: Vec<Club>,
    index: HashMap<ClubId, usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clubs in the order they were added.
    #[inline]
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// Create a club and append it.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidName` if the name is empty after trimming
    /// - `DomainError::InvalidCapacity` if the capacity is zero
    /// - `DomainError::DuplicateName` if a club already has this name, ignoring case
    pub fn add(&mut self, name: &str, capacity: u32) -> Result<&mut Club, DomainError> {
        let name = ClubName::new(name)?;
        let capacity = Capacity::new(capacity)?;
        self.insert(Club::new(name, capacity))
    }

    /// Append an already built club (e.g. one created from a seed).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateName` if a club already has this name, ignoring case.
    pub fn insert(&mut self, club: Club) -> Result<&mut Club, DomainError> {
        if self.contains_name(club.name().as_str()) {
            return Err(DomainError::duplicate_name(club.name().as_str()));
        }
        let position = self.clubs.len();
        self.index.insert(club.id().clone(), position);
        self.clubs.push(club);
        Ok(&mut self.clubs[position])
    }

    /// True if a club with this name exists, ignoring case.
    pub fn contains_name(&self, name: &str) -> bool {
        self.clubs.iter().any(|c| c.name().matches(name))
    }

    pub fn find_by_id(&self, id: &ClubId) -> Option<&Club> {
        self.index.get(id).map(|&position| &self.clubs[position])
    }

    pub fn find_by_id_mut(&mut self, id: &ClubId) -> Option<&mut Club> {
        let position = *self.index.get(id)?;
        self.clubs.get_mut(position)
    }

    /// Remove a club by id. Returns false if no such club exists.
    pub fn remove(&mut self, id: &ClubId) -> bool {
        let Some(position) = self.index.remove(id) else {
            return false;
        };
        self.clubs.remove(position);
        for club in &self.clubs[position..] {
            if let Some(slot) = self.index.get_mut(club.id()) {
                *slot -= 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(roster: &Roster) -> Vec<&str> {
        roster.clubs().iter().map(|c| c.name().as_str()).collect()
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut roster = Roster::new();
        roster.add("Coding Club", 10).unwrap();
        roster.add("Art Club", 8).unwrap();
        roster.add("Book Club", 12).unwrap();

        assert_eq!(names(&roster), vec!["Coding Club", "Art Club", "Book Club"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn add_rejects_duplicate_ignoring_case() {
        let mut roster = Roster::new();
        roster.add("Art Club", 8).unwrap();

        let err = roster.add("art CLUB", 4).unwrap_err();
        assert_eq!(err, DomainError::DuplicateName("art CLUB".to_string()));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn add_validates_name_and_capacity() {
        let mut roster = Roster::new();
        assert!(matches!(roster.add("", 5), Err(DomainError::InvalidName(_))));
        assert_eq!(roster.add("Chess", 0).unwrap_err(), DomainError::InvalidCapacity(0));
        assert!(roster.is_empty());
    }

    #[test]
    fn find_by_id() {
        let mut roster = Roster::new();
        let id = roster.add("Robotics", 6).unwrap().id().clone();

        assert_eq!(roster.find_by_id(&id).unwrap().name().as_str(), "Robotics");
        assert!(roster.find_by_id(&ClubId::new()).is_none());
    }

    #[test]
    fn find_by_id_mut_changes_canonical_club() {
        let mut roster = Roster::new();
        let id = roster.add("Robotics", 6).unwrap().id().clone();

        roster.find_by_id_mut(&id).unwrap().add_member("Jordan").unwrap();
        assert_eq!(roster.find_by_id(&id).unwrap().current(), 1);
    }

    #[test]
    fn remove_reindexes_later_clubs() {
        let mut roster = Roster::new();
        let a = roster.add("A", 1).unwrap().id().clone();
        let b = roster.add("B", 1).unwrap().id().clone();
        let c = roster.add("C", 1).unwrap().id().clone();

        assert!(roster.remove(&a));
        assert!(!roster.remove(&a));
        assert_eq!(names(&roster), vec!["B", "C"]);
        assert_eq!(roster.find_by_id(&b).unwrap().name().as_str(), "B");
        assert_eq!(roster.find_by_id(&c).unwrap().name().as_str(), "C");
        assert!(roster.find_by_id(&a).is_none());
    }

    #[test]
    fn removed_name_can_be_reused() {
        let mut roster = Roster::new();
        let id = roster.add("Chess", 4).unwrap().id().clone();
        roster.remove(&id);
        assert!(roster.add("chess", 4).is_ok());
    }
}
