//! Clubroster engine library.
//!
//! ## Structure
//!
//! - `app` - `RosterApp`, the composition root driving the domain
//! - `command` - line commands for the terminal front end
//! - `debounce` - trailing-edge debouncer for search input
//! - `view_model` - render snapshots and status text
//! - `infrastructure/` - ports, adapters, settings and seed loading

pub mod app;
pub mod command;
pub mod debounce;
pub mod infrastructure;
pub mod view_model;

pub use app::RosterApp;
pub use debounce::{debounce, Debouncer};
pub use infrastructure::error::AppError;
pub use infrastructure::settings::AppSettings;
pub use view_model::ClubCard;
