//! Ports the application layer depends on.
//!
//! - `ClockPort` injects time so "today" is testable.
//! - `RenderPort` is the presentation collaborator: it receives ready-made
//!   card snapshots and status text, and never sees a domain object.

use chrono::{DateTime, Utc};
use clubroster_domain::ClubId;

use crate::view_model::ClubCard;

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// =============================================================================
// Presentation Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait RenderPort: Send + Sync {
    /// Replace the displayed club list.
    fn render(&self, cards: &[ClubCard]);

    /// Show a message next to one club's forms.
    fn set_status(&self, club_id: &ClubId, message: &str);

    /// Show a message on the create-club form; empty clears it.
    fn set_form_error(&self, message: &str);
}
