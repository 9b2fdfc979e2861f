//! View Rendering
//!
//! Maps a view state to presentational output. Every resource page renders
//! the same four states: loading, error, empty and populated.
//!
//! - [`components`]: Leptos components for the app shell and shared panels
//! - [`html`]: server-side rendering of those components to full pages
//! - [`output`]: text tables, JSON and CSV for the command line

pub mod components;
pub mod html;
pub mod output;
mod pages;
pub mod state;

pub use output::{OutputFormat, RenderError};
pub use state::{ResourceView, ViewState, ViewStatus};

use leptos::View;

use crate::fetch::{CancellationToken, ResourceClient};
use crate::models::{Activity, LeaderboardEntry, Record, Team, User, Workout};
use crate::resource::Resource;

/// Presentation of one resource's records
pub trait ResourcePage: Record + Clone + 'static {
    const RESOURCE: Resource;

    /// Plain-text page title
    const TITLE: &'static str;

    const EMPTY_HEADING: &'static str;
    const EMPTY_MESSAGE: &'static str;

    /// Column headers for tabular output
    const COLUMNS: &'static [&'static str];

    /// Page heading
    fn heading() -> View;

    /// Inert action buttons beside the heading
    fn actions() -> View;

    /// A non-empty record list
    fn records_view(items: Vec<Self>) -> View;

    /// One table row, aligned with [`Self::COLUMNS`]
    fn row(&self) -> Vec<String>;
}

/// Outcome of loading and rendering one view
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub resource: Resource,
    pub status: ViewStatus,
    pub body: String,
}

/// Where a rendered view is headed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Full page for the web front end
    Html,
    /// Command-line output
    Output(OutputFormat),
}

/// Load the view for `resource` and render it for `target`
pub async fn load_and_render(
    client: &ResourceClient,
    resource: Resource,
    token: CancellationToken,
    target: RenderTarget,
) -> Result<RenderedView, RenderError> {
    match resource {
        Resource::Activities => render_as::<Activity>(client, token, target).await,
        Resource::Leaderboard => render_as::<LeaderboardEntry>(client, token, target).await,
        Resource::Teams => render_as::<Team>(client, token, target).await,
        Resource::Users => render_as::<User>(client, token, target).await,
        Resource::Workouts => render_as::<Workout>(client, token, target).await,
    }
}

async fn render_as<P: ResourcePage>(
    client: &ResourceClient,
    token: CancellationToken,
    target: RenderTarget,
) -> Result<RenderedView, RenderError> {
    let mut view = ResourceView::<P>::with_token(P::RESOURCE, token);
    let state = view.load(client).await;

    let body = match target {
        RenderTarget::Html => html::resource_page(state.clone()),
        RenderTarget::Output(format) => output::render(state, format)?,
    };

    Ok(RenderedView {
        resource: P::RESOURCE,
        status: state.status(),
        body,
    })
}

/// Page title for a resource
pub fn title(resource: Resource) -> &'static str {
    match resource {
        Resource::Activities => Activity::TITLE,
        Resource::Leaderboard => LeaderboardEntry::TITLE,
        Resource::Teams => Team::TITLE,
        Resource::Users => User::TITLE,
        Resource::Workouts => Workout::TITLE,
    }
}
