//! Render snapshots and user-facing messages.
//!
//! Cards are plain data built from a club at paint time; a renderer can hold
//! on to them without borrowing the roster.

use chrono::NaiveDate;
use serde::Serialize;

use clubroster_domain::common::friendly_when;
use clubroster_domain::{Club, ClubId, DomainError, Event, EventId, Member, MemberId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubCard {
    pub id: ClubId,
    pub name: String,
    pub current: u32,
    pub capacity: u32,
    pub seats_left: u32,
    pub percent_full: u32,
    /// e.g. "3/10 seats filled (7 left, 30% full)"
    pub stats: String,
    pub members: Vec<MemberCard>,
    pub events: Vec<EventCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCard {
    pub id: MemberId,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    pub id: EventId,
    pub title: String,
    pub description: String,
    /// e.g. "Sep 10, 2025 (in 12 days)"
    pub when: String,
    pub is_past: bool,
    pub attendees: usize,
    pub capacity: u32,
}

impl ClubCard {
    pub fn from_club(club: &Club, today: NaiveDate) -> Self {
        Self {
            id: club.id().clone(),
            name: club.name().to_string(),
            current: club.current(),
            capacity: club.capacity().get(),
            seats_left: club.seats_left(),
            percent_full: club.percent_full(),
            stats: format!(
                "{}/{} seats filled ({} left, {}% full)",
                club.current(),
                club.capacity(),
                club.seats_left(),
                club.percent_full()
            ),
            members: club.members().iter().map(MemberCard::from).collect(),
            events: club
                .events()
                .iter()
                .map(|event| EventCard::from_event(event, today))
                .collect(),
        }
    }
}

impl From<&Member> for MemberCard {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id().clone(),
            name: member.name().to_string(),
            role: member.role().to_string(),
        }
    }
}

impl EventCard {
    pub fn from_event(event: &Event, today: NaiveDate) -> Self {
        Self {
            id: event.id().clone(),
            title: event.title().to_string(),
            description: event.description().to_string(),
            when: friendly_when(event.date(), today),
            is_past: event.is_past_on(today),
            attendees: event.attendees().len(),
            capacity: event.capacity().get(),
        }
    }
}

// =============================================================================
// Status messages
// =============================================================================

pub const MEMBER_ADDED: &str = "Member added.";
pub const EVENT_ADDED: &str = "Event added.";
pub const EVENT_FORM_INCOMPLETE: &str = "Enter a title, date, and capacity (>0).";

/// Text shown to the user when an operation is rejected.
pub fn status_message(err: &DomainError) -> &'static str {
    match err {
        DomainError::InvalidName(_) => "Please enter a name.",
        DomainError::Full { .. } => "Club is at capacity.",
        DomainError::DuplicateName(_) => "That name is already taken.",
        DomainError::InvalidDate(_) => "Please pick a valid date.",
        DomainError::InvalidCapacity(_) => "Capacity must be at least 1.",
        DomainError::NotFound { .. } => "That item no longer exists.",
    }
}

/// Create-club form variant of [`status_message`].
pub fn club_form_message(err: &DomainError) -> &'static str {
    match err {
        DomainError::DuplicateName(_) => "A club with this name already exists.",
        DomainError::InvalidName(_) | DomainError::InvalidCapacity(_) => {
            "Please enter a valid club name and capacity (min 1)."
        }
        other => status_message(other),
    }
}

/// Add-member form variant of [`status_message`].
pub fn member_form_message(err: &DomainError) -> &'static str {
    match err {
        DomainError::InvalidName(_) => "Please enter a member name.",
        DomainError::DuplicateName(_) => "Member name already exists.",
        other => status_message(other),
    }
}

/// Add-event form variant of [`status_message`].
pub fn event_form_message(err: &DomainError) -> &'static str {
    match err {
        DomainError::InvalidName(_) | DomainError::InvalidCapacity(_) => EVENT_FORM_INCOMPLETE,
        other => status_message(other),
    }
}
