//! Bulk construction of clubs from plain data.
//!
//! Seeds describe a club by its head count rather than by member names; the
//! members are generated as `Member 1..=N`.

use serde::{Deserialize, Serialize};

use crate::aggregates::{Club, Roster};
use crate::entities::NewEvent;
use crate::error::DomainError;
use crate::value_objects::{Capacity, ClubName};

/// Plain description of a club to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSeed {
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub events: Vec<EventSeed>,
}

/// Plain description of an event to schedule on a seeded club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSeed {
    pub title: String,
    #[serde(alias = "dateISO")]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_event_capacity")]
    pub capacity: u32,
}

fn default_event_capacity() -> u32 {
    Capacity::DEFAULT_EVENT.get()
}

impl ClubSeed {
    pub fn new(name: impl Into<String>, capacity: u32, current: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
            current,
            events: Vec::new(),
        }
    }

    pub fn with_event(mut self, event: EventSeed) -> Self {
        self.events.push(event);
        self
    }
}

impl EventSeed {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            description: String::new(),
            capacity: default_event_capacity(),
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

impl From<&EventSeed> for NewEvent {
    fn from(seed: &EventSeed) -> Self {
        NewEvent::new(seed.title.clone(), seed.date.clone())
            .with_description(seed.description.clone())
            .with_capacity(seed.capacity)
    }
}

impl Club {
    /// Build a club with `seed.current` generated members and the seeded events.
    ///
    /// # Errors
    ///
    /// Any error from validating the name/capacity, adding a member (e.g.
    /// `Full` when `current > capacity`) or adding an event. Nothing is
    /// returned on error, so a failed seed never yields a half-built club.
    pub fn from_seed(seed: &ClubSeed) -> Result<Self, DomainError> {
        let mut club = Club::new(ClubName::new(seed.name.as_str())?, Capacity::new(seed.capacity)?);
        for n in 1..=seed.current {
            club.add_member(&format!("Member {n}"))?;
        }
        for event in &seed.events {
            club.add_event(NewEvent::from(event))?;
        }
        Ok(club)
    }
}

impl Roster {
    /// Build a club from a seed and append it.
    ///
    /// # Errors
    ///
    /// See [`Club::from_seed`] and [`Roster::insert`].
    pub fn add_seeded(&mut self, seed: &ClubSeed) -> Result<&mut Club, DomainError> {
        let club = Club::from_seed(seed)?;
        self.insert(club)
    }

    /// Build a roster from seeds, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// The first error from [`Roster::add_seeded`].
    pub fn from_seeds(seeds: &[ClubSeed]) -> Result<Self, DomainError> {
        let mut roster = Roster::new();
        for seed in seeds {
            roster.add_seeded(seed)?;
        }
        Ok(roster)
    }
}

/// The demo clubs shown on first load.
pub fn demo_seeds() -> Vec<ClubSeed> {
    vec![
        ClubSeed::new("Coding Club", 10, 3)
            .with_event(
                EventSeed::new("Hack Night", "2025-09-10")
                    .with_description("Bring a project.")
                    .with_capacity(30),
            )
            .with_event(EventSeed::new("Intro to Git", "2025-09-03").with_description("Hands-on basics.")),
        ClubSeed::new("Art Club", 8, 8).with_event(EventSeed::new("Open Studio", "2025-08-30")),
        ClubSeed::new("Book Club", 12, 2),
        ClubSeed::new("Robotics", 6, 5),
    ]
}
