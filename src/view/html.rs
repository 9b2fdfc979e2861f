//! HTML Rendering
//!
//! Renders the [`App`] component to a full document on the server. The
//! request path drives the router; the resource state, when there is one,
//! is provided as context for the matching page component.

use leptos::*;
use leptos_router::{RouterIntegrationContext, ServerIntegration};

use super::components::App;
use super::state::ViewState;
use super::ResourcePage;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

/// The router parses locations as absolute URLs
const ORIGIN: &str = "http://octofit.local";

pub fn home_page() -> String {
    render("/", "Home", || {})
}

/// Page for a path no route matches
pub fn not_found_page(path: &str) -> String {
    render(path, "Page Not Found", || {})
}

/// Page for one resource view in `state`
pub fn resource_page<P: ResourcePage>(state: ViewState<P>) -> String {
    let path = P::RESOURCE.route();
    render(&path, P::TITLE, move || provide_context(state))
}

fn render<F>(path: &str, title: &'static str, setup: F) -> String
where
    F: FnOnce() + 'static,
{
    let location = format!("{}{}", ORIGIN, path);
    let setup: Box<dyn FnOnce()> = Box::new(setup);

    let body = leptos::ssr::render_to_string(move || {
        view! { <Page location=location setup=setup /> }
    })
    .to_string();

    document(title, &body)
}

/// Server-side root: router location and page context, then the app
#[component]
fn Page(location: String, setup: Box<dyn FnOnce()>) -> impl IntoView {
    provide_context(RouterIntegrationContext::new(ServerIntegration { path: location }));
    setup();

    view! { <App /> }
}

fn document(title: &'static str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - OctoFit Tracker</title>
<link rel="stylesheet" href="{BOOTSTRAP_CSS}">
<link rel="stylesheet" href="{BOOTSTRAP_ICONS_CSS}">
</head>
<body class="d-flex flex-column min-vh-100">
{body}
<script src="{BOOTSTRAP_JS}"></script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Team, User};

    /// The opening tag of the link marked as the current page
    fn current_link(page: &str) -> Option<&str> {
        let marker = page.find(r#"aria-current="page""#)?;
        let start = page[..marker].rfind("<a")?;
        let end = marker + page[marker..].find('>')?;
        Some(&page[start..end])
    }

    #[test]
    fn test_home_page() {
        let page = home_page();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Home - OctoFit Tracker</title>"));
        assert!(page.contains("Welcome to OctoFit Tracker"));
        for action in ["View Activities", "View Leaderboard", "Explore Teams", "Browse Workouts"] {
            assert!(page.contains(action));
        }
        assert!(current_link(&page).is_none());
    }

    #[test]
    fn test_navigation_marks_current_route() {
        let page = resource_page::<Team>(ViewState::Ready(vec![]));

        assert_eq!(page.matches(r#"aria-current="page""#).count(), 1);
        let link = current_link(&page).unwrap();
        assert!(link.contains("teams"));
    }

    #[test]
    fn test_not_found_page() {
        let page = not_found_page("/profile");

        assert!(page.contains("<title>Page Not Found - OctoFit Tracker</title>"));
        assert!(page.contains("Page Not Found"));
        assert!(page.contains("profile"));
        assert!(!page.contains("Welcome to OctoFit Tracker"));
    }

    #[test]
    fn test_error_panel_escapes_message() {
        let page = resource_page::<User>(ViewState::Error("<script>".into()));

        assert!(page.contains("alert-danger"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
