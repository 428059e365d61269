//! Clubroster Engine - Main entry point.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clubroster_domain::{ClubId, RsvpOutcome};
use clubroster_engine::command::Command;
use clubroster_engine::infrastructure::{
    clock::SystemClock, console::ConsoleRenderer, seeds::initial_roster,
};
use clubroster_engine::{AppSettings, RosterApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root so running from `crates/engine` still works.
    load_dotenv_from_repo_root();

    // Logs go to stderr; stdout carries the rendered roster.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clubroster_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Clubroster Engine");

    let settings = AppSettings::from_env()?;
    tracing::info!(
        search_debounce_ms = settings.search_debounce.as_millis() as u64,
        seed_file = ?settings.seed_file,
        load_demo = settings.load_demo,
        "Settings loaded"
    );

    let roster = initial_roster(&settings)?;
    let app = RosterApp::new(
        roster,
        settings.search_debounce,
        Arc::new(ConsoleRenderer::stdout()),
        Arc::new(SystemClock::new()),
    );
    app.paint();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => dispatch(&app, command),
            Ok(None) => {}
            Err(e) => eprintln!("{e}"),
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

fn dispatch(app: &RosterApp, command: Command) {
    match command {
        Command::Search(text) => app.set_search_text(text),
        Command::OnlyOpen(only_open) => app.set_only_open(only_open),
        Command::Sort(sort_key) => app.set_sort_key(sort_key),
        // Rejections below are already reported through the renderer
        Command::AddClub { name, capacity } => {
            let _ = app.add_club(&name, capacity);
        }
        Command::AddMember { club, name } => {
            if let Some(club_id) = resolve_club(app, &club) {
                let _ = app.add_member(&club_id, &name);
            }
        }
        Command::RemoveMember { club, member } => {
            let Some(club_id) = resolve_club(app, &club) else {
                return;
            };
            match app.member_id_by_name(&club_id, &member) {
                Some(member_id) => {
                    app.remove_member(&club_id, &member_id);
                }
                None => eprintln!("No member named {member:?} in {club}"),
            }
        }
        Command::AddEvent { club, event } => {
            if let Some(club_id) = resolve_club(app, &club) {
                let _ = app.add_event(&club_id, event);
            }
        }
        Command::RemoveEvent { club, event } => {
            let Some(club_id) = resolve_club(app, &club) else {
                return;
            };
            match app.event_id_by_title(&club_id, &event) {
                Some(event_id) => {
                    app.remove_event(&club_id, &event_id);
                }
                None => eprintln!("No event titled {event:?} in {club}"),
            }
        }
        Command::Rsvp {
            club,
            event,
            member,
        } => {
            let Some(club_id) = resolve_club(app, &club) else {
                return;
            };
            let (Some(event_id), Some(member_id)) = (
                app.event_id_by_title(&club_id, &event),
                app.member_id_by_name(&club_id, &member),
            ) else {
                eprintln!("No event {event:?} or member {member:?} in {club}");
                return;
            };
            if let Some(RsvpOutcome::Ignored) = app.toggle_rsvp(&club_id, &event_id, &member_id) {
                eprintln!("{event} is full");
            }
        }
        Command::List => app.paint(),
        Command::Quit => {}
    }
}

fn resolve_club(app: &RosterApp, name: &str) -> Option<ClubId> {
    let club_id = app.club_id_by_name(name);
    if club_id.is_none() {
        eprintln!("No club named {name:?}");
    }
    club_id
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
