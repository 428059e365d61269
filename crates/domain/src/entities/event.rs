//! Event entity - a dated club activity with its own attendance cap

use chrono::{Local, NaiveDate};

use crate::common::parse_event_date;
use crate::error::DomainError;
use crate::ids::{EventId, MemberId};
use crate::value_objects::Capacity;

/// Input for scheduling an event on a club.
///
/// `date` is kept as the raw string the user typed; it is validated when the
/// club accepts the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub description: String,
    pub capacity: u32,
}

impl NewEvent {
    /// Starts an event with an empty description and the default capacity (100).
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            description: String::new(),
            capacity: Capacity::DEFAULT_EVENT.get(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}

/// What a call to [`Event::toggle_rsvp`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpOutcome {
    /// The member now attends.
    Added,
    /// The member no longer attends.
    Removed,
    /// The event was full; nothing changed.
    Ignored,
    /// The member does not belong to the owning club; nothing changed.
    NotAMember,
}

/// A scheduled club event.
///
/// # Invariants
///
/// - `attendees.len() <= capacity`
/// - `attendees` holds no duplicates; order is RSVP order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    title: String,
    date: NaiveDate,
    description: String,
    capacity: Capacity,
    attendees: Vec<MemberId>,
}

impl Event {
    /// Validates `new` and builds the event.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidDate` if the date does not parse
    /// - `DomainError::InvalidCapacity` if the capacity is zero
    pub(crate) fn create(new: NewEvent) -> Result<Self, DomainError> {
        let date = parse_event_date(&new.date)?;
        let capacity = Capacity::new(new.capacity)?;
        Ok(Self {
            id: EventId::new(),
            title: new.title,
            date,
            description: new.description,
            capacity,
            attendees: Vec::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &EventId {
        &self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Attending member ids in RSVP order.
    #[inline]
    pub fn attendees(&self) -> &[MemberId] {
        &self.attendees
    }

    pub fn is_attending(&self, member_id: &MemberId) -> bool {
        self.attendees.contains(member_id)
    }

    pub fn is_full(&self) -> bool {
        self.attendees.len() >= self.capacity.get() as usize
    }

    // =========================================================================
    // Derived
    // =========================================================================

    /// True if the event's day is before `today`. An event today is not past.
    pub fn is_past_on(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// [`Event::is_past_on`] against the local calendar date.
    pub fn is_past(&self) -> bool {
        self.is_past_on(Local::now().date_naive())
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Flips the member's attendance.
    ///
    /// A full event silently ignores new RSVPs; removing is always allowed.
    pub fn toggle_rsvp(&mut self, member_id: &MemberId) -> RsvpOutcome {
        if let Some(pos) = self.attendees.iter().position(|id| id == member_id) {
            self.attendees.remove(pos);
            RsvpOutcome::Removed
        } else if self.is_full() {
            RsvpOutcome::Ignored
        } else {
            self.attendees.push(member_id.clone());
            RsvpOutcome::Added
        }
    }
}
