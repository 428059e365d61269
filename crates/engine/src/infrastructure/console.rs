//! Plain-text renderer for the terminal.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use clubroster_domain::ClubId;

use crate::infrastructure::ports::RenderPort;
use crate::view_model::ClubCard;

/// Writes club cards and status lines to any `io::Write`.
pub struct ConsoleRenderer<W> {
    out: Mutex<W>,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "Failed to write to console");
        }
    }
}

/// Multi-line text block for one club.
pub fn format_card(card: &ClubCard) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{} [{}]", card.name, card.id);
    let _ = writeln!(text, "  {}", card.stats);

    if !card.members.is_empty() {
        let names: Vec<String> = card
            .members
            .iter()
            .map(|m| format!("{} ({})", m.name, m.role))
            .collect();
        let _ = writeln!(text, "  Members: {}", names.join(", "));
    }

    for event in &card.events {
        let marker = if event.is_past { " (past)" } else { "" };
        let _ = writeln!(
            text,
            "  - {}{}: {} [{}/{}]",
            event.title, marker, event.when, event.attendees, event.capacity
        );
        if !event.description.is_empty() {
            let _ = writeln!(text, "    {}", event.description);
        }
    }
    text
}

impl<W: Write + Send> RenderPort for ConsoleRenderer<W> {
    fn render(&self, cards: &[ClubCard]) {
        let mut text = String::new();
        if cards.is_empty() {
            text.push_str("No clubs match your filters.\n");
        }
        for card in cards {
            text.push_str(&format_card(card));
            text.push('\n');
        }
        self.emit(&text);
    }

    fn set_status(&self, club_id: &ClubId, message: &str) {
        self.emit(&format!("[{club_id}] {message}\n"));
    }

    fn set_form_error(&self, message: &str) {
        if !message.is_empty() {
            self.emit(&format!("{message}\n"));
        }
    }
}
