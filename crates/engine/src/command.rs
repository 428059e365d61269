//! Line commands accepted by the terminal front end.
//!
//! ```text
//! search <text>                                 debounced name filter
//! open on|off                                   hide full clubs
//! sort name-asc|name-desc|seats-desc|capacity-desc
//! club <capacity> <name>                        create a club
//! member <club> / <name>                        add a member
//! remove-member <club> / <name>
//! event <club> / <title> / <date> [/ <capacity>] [/ <description>]
//! remove-event <club> / <title>
//! rsvp <club> / <event title> / <member>        toggle attendance
//! list                                          repaint
//! quit
//! ```

use clubroster_domain::{NewEvent, SortKey};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    OnlyOpen(bool),
    Sort(SortKey),
    AddClub { name: String, capacity: u32 },
    AddMember { club: String, name: String },
    RemoveMember { club: String, member: String },
    AddEvent { club: String, event: NewEvent },
    RemoveEvent { club: String, event: String },
    Rsvp { club: String, event: String, member: String },
    List,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

const CLUB_USAGE: &str = "club <capacity> <name>";
const MEMBER_USAGE: &str = "member <club> / <name>";
const REMOVE_MEMBER_USAGE: &str = "remove-member <club> / <name>";
const REMOVE_EVENT_USAGE: &str = "remove-event <club> / <title>";
const RSVP_USAGE: &str = "rsvp <club> / <event title> / <member>";
const EVENT_USAGE: &str = "event <club> / <title> / <date> [/ <capacity>] [/ <description>]";

impl Command {
    /// Parse one input line. Blank lines are `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));

        let command = match verb.to_ascii_lowercase().as_str() {
            // An empty search clears the filter
            "search" => Command::Search(rest.to_string()),
            "open" => match rest.to_ascii_lowercase().as_str() {
                "on" | "true" | "yes" => Command::OnlyOpen(true),
                "off" | "false" | "no" => Command::OnlyOpen(false),
                _ => return Err(CommandError::Usage("open on|off")),
            },
            "sort" => Command::Sort(SortKey::from(rest)),
            "club" => {
                let (capacity, name) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage(CLUB_USAGE))?;
                let capacity = capacity
                    .parse()
                    .map_err(|_| CommandError::Usage(CLUB_USAGE))?;
                Command::AddClub {
                    name: name.trim().to_string(),
                    capacity,
                }
            }
            "member" => {
                let [club, name] = slash_fields(rest, MEMBER_USAGE)?;
                Command::AddMember { club, name }
            }
            "remove-member" => {
                let [club, member] = slash_fields(rest, REMOVE_MEMBER_USAGE)?;
                Command::RemoveMember { club, member }
            }
            "event" => parse_event(rest)?,
            "remove-event" => {
                let [club, event] = slash_fields(rest, REMOVE_EVENT_USAGE)?;
                Command::RemoveEvent { club, event }
            }
            "rsvp" => {
                let [club, event, member] = slash_fields(rest, RSVP_USAGE)?;
                Command::Rsvp {
                    club,
                    event,
                    member,
                }
            }
            "list" => Command::List,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };
        Ok(Some(command))
    }
}

/// Exactly `N` non-empty `/`-separated fields, trimmed.
fn slash_fields<const N: usize>(
    rest: &str,
    usage: &'static str,
) -> Result<[String; N], CommandError> {
    let fields: Vec<String> = rest.split('/').map(|f| f.trim().to_string()).collect();
    if fields.iter().any(String::is_empty) {
        return Err(CommandError::Usage(usage));
    }
    fields.try_into().map_err(|_| CommandError::Usage(usage))
}

fn parse_event(rest: &str) -> Result<Command, CommandError> {
    // The description is the untouched remainder and may contain '/'
    let parts: Vec<&str> = rest.splitn(5, '/').map(str::trim).collect();
    let [club, title, date, tail @ ..] = parts.as_slice() else {
        return Err(CommandError::Usage(EVENT_USAGE));
    };

    let mut event = NewEvent::new(*title, *date);
    if let Some(capacity) = tail.first().filter(|c| !c.is_empty()) {
        event.capacity = capacity
            .parse()
            .map_err(|_| CommandError::Usage(EVENT_USAGE))?;
    }
    if let Some(description) = tail.get(1) {
        event.description = description.to_string();
    }

    Ok(Command::AddEvent {
        club: club.to_string(),
        event,
    })
}
