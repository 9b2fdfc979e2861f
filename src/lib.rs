//! # OctoFit Tracker
//!
//! Fitness front end over a REST API: activities, leaderboard, teams, users
//! and workouts, each fetched from `{base_url}/api/{resource}/` and rendered
//! as a loading, error, empty or populated view.
//!
//! ## Features
//!
//! - **Tolerant fetching**: accepts paginated `{"results": [...]}` and bare
//!   array payloads; anything else is an empty collection
//! - **Cancellable views**: a view's fetch is aborted when the view goes away
//! - **Server-rendered pages**: Leptos components with Bootstrap 5, served by Axum
//! - **CLI**: table, JSON and CSV output for any collection
//! - **Demo API**: seeded superhero data for local runs and tests
//!
//! ## Modules
//!
//! - [`fetch`]: Resource client, payload normalization, cancellation
//! - [`models`]: Typed records with field fallbacks resolved at decode time
//! - [`view`]: View state machine and HTML / text rendering
//! - [`router`]: Path to page resolution
//! - [`server`]: Web front end with Axum
//! - [`demo`]: Read-only demo API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octofit::fetch::{CancellationToken, ClientConfig, ResourceClient};
//! use octofit::models::Team;
//! use octofit::Resource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ResourceClient::new(ClientConfig::new("http://localhost:8000"))?;
//!
//!     let token = CancellationToken::new();
//!     let teams: Vec<Team> = client.fetch_records(Resource::Teams, &token).await?;
//!
//!     for team in &teams {
//!         println!("{} ({} members)", team.name_label(), team.members);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod demo;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod resource;
pub mod router;
pub mod server;
pub mod view;

// Re-export top-level types for convenience
pub use resource::{Resource, UnknownResource};

pub use fetch::{
    normalize, CancellationToken, ClientConfig, FetchError, FetchResult, ResourceClient,
};

pub use models::{Activity, LeaderboardEntry, RankTier, Record, Team, User, Workout};

pub use view::{OutputFormat, RenderError, ResourceView, ViewState, ViewStatus};

pub use router::Route;

pub use server::{build_router, serve, AppState, ServerError, ServerResult};

pub use config::{Config, ConfigError, LoggingConfig};
