//! Club aggregate - members and events under a seat limit
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: members and events are only reachable through the club
//! - **Newtypes**: `ClubName`, `MemberName` and `Capacity` are valid by construction
//! - **Atomic mutations**: every check runs before anything is written, so a
//!   rejected call leaves the club exactly as it was

use chrono::{Local, NaiveDate};

use crate::entities::{Event, Member, NewEvent, RsvpOutcome, DEFAULT_ROLE};
use crate::error::DomainError;
use crate::ids::{ClubId, EventId, MemberId};
use crate::value_objects::{Capacity, ClubName, MemberName};

/// A club with bounded membership and its own event calendar.
///
/// # Invariants
///
/// - `current() <= capacity()` (checked when adding, never corrected afterwards)
/// - member names are unique ignoring case
/// - `events` is sorted by date; events on the same day keep insertion order
/// - event attendees are not pruned when a member leaves
///
/// # Example
///
/// ```
/// use clubroster_domain::aggregates::Club;
/// use clubroster_domain::value_objects::{Capacity, ClubName};
///
/// let mut club = Club::new(ClubName::new("Robotics").unwrap(), Capacity::new(6).unwrap());
/// club.add_member("Jordan").unwrap();
///
/// assert_eq!(club.current(), 1);
/// assert_eq!(club.seats_left(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    id: ClubId,
    name: ClubName,
    capacity: Capacity,
    members: Vec<Member>,
    events: Vec<Event>,
}

impl Club {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create an empty club. Name and capacity are validated by their types.
    pub fn new(name: ClubName, capacity: Capacity) -> Self {
        Self {
            id: ClubId::new(),
            name,
            capacity,
            members: Vec::new(),
            events: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &ClubId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &ClubName {
        &self.name
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Members in the order they joined.
    #[inline]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Events sorted by date, earliest first.
    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn member(&self, member_id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id() == member_id)
    }

    pub fn event(&self, event_id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id() == event_id)
    }

    // =========================================================================
    // Derived
    // =========================================================================

    /// Number of members.
    pub fn current(&self) -> u32 {
        u32::try_from(self.members.len()).unwrap_or(u32::MAX)
    }

    pub fn seats_left(&self) -> u32 {
        self.capacity.remaining(self.current())
    }

    pub fn percent_full(&self) -> u32 {
        self.capacity.percent_taken(self.current())
    }

    pub fn is_open(&self) -> bool {
        self.seats_left() > 0
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Add a member with the default role.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `DomainError::InvalidName` if the name is empty after trimming
    /// - `DomainError::Full` if no seats are left
    /// - `DomainError::DuplicateName` if a member already has this name, ignoring case
    pub fn add_member(&mut self, name: &str) -> Result<&Member, DomainError> {
        self.add_member_with_role(name, DEFAULT_ROLE)
    }

    /// Add a member with an explicit role. Same checks as [`Club::add_member`].
    pub fn add_member_with_role(
        &mut self,
        name: &str,
        role: impl Into<String>,
    ) -> Result<&Member, DomainError> {
        let name = MemberName::new(name)?;
        if self.seats_left() == 0 {
            return Err(DomainError::full(self.current(), self.capacity.get()));
        }
        if self.members.iter().any(|m| m.name().matches(name.as_str())) {
            return Err(DomainError::duplicate_name(name.as_str()));
        }

        let index = self.members.len();
        self.members.push(Member::new(name, role));
        Ok(&self.members[index])
    }

    /// Remove a member by id. Returns false if no such member exists.
    pub fn remove_member(&mut self, member_id: &MemberId) -> bool {
        match self.members.iter().position(|m| m.id() == member_id) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Schedule an event. Past dates are accepted.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidDate` if the date does not parse
    /// - `DomainError::InvalidCapacity` if the event capacity is zero
    pub fn add_event(&mut self, new: NewEvent) -> Result<&Event, DomainError> {
        let event = Event::create(new)?;
        // Insert after every event on or before this date to keep ties in insertion order
        let index = self.events.partition_point(|e| e.date() <= event.date());
        self.events.insert(index, event);
        Ok(&self.events[index])
    }

    /// Remove an event by id. Returns false if no such event exists.
    pub fn remove_event(&mut self, event_id: &EventId) -> bool {
        match self.events.iter().position(|e| e.id() == event_id) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => false,
        }
    }

    /// Events on or after `today`, earliest first.
    pub fn upcoming_events_on(&self, today: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| !e.is_past_on(today)).collect()
    }

    /// Events on or after the local calendar date at call time.
    pub fn upcoming_events(&self) -> Vec<&Event> {
        self.upcoming_events_on(Local::now().date_naive())
    }

    /// Toggle a member's RSVP for one of this club's events.
    ///
    /// Returns `None` if the event does not exist. Ids that are neither a
    /// current member nor already attending are ignored.
    pub fn toggle_rsvp(
        &mut self,
        event_id: &EventId,
        member_id: &MemberId,
    ) -> Option<RsvpOutcome> {
        let is_member = self.members.iter().any(|m| m.id() == member_id);
        let event = self.events.iter_mut().find(|e| e.id() == event_id)?;
        if !is_member && !event.is_attending(member_id) {
            return Some(RsvpOutcome::NotAMember);
        }
        Some(event.toggle_rsvp(member_id))
    }
}
