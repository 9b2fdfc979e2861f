//! Page Components
//!
//! The application shell (router, navigation, home and not-found pages) and
//! the loading / error / empty panels shared by every resource page.

use leptos::*;
use leptos_router::*;

use super::state::ViewState;
use super::ResourcePage;
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::resource::Resource;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="App">
                <Nav />

                <main class="flex-grow-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/activities" view=ActivitiesPage />
                        <Route path="/leaderboard" view=LeaderboardPage />
                        <Route path="/teams" view=TeamsPage />
                        <Route path="/users" view=UsersPage />
                        <Route path="/workouts" view=WorkoutsPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Navigation bar; the link for the current path is marked active
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-primary shadow-sm">
            <div class="container">
                // Brand
                <a class="navbar-brand fw-bold" href="/">
                    <i class="bi bi-activity me-2"></i>
                    "OctoFit Tracker"
                </a>
                <button
                    class="navbar-toggler"
                    type="button"
                    data-bs-toggle="collapse"
                    data-bs-target="#navbarNav"
                >
                    <span class="navbar-toggler-icon"></span>
                </button>

                <div class="collapse navbar-collapse" id="navbarNav">
                    // One link per collection
                    <ul class="navbar-nav me-auto">
                        {Resource::ALL
                            .into_iter()
                            .map(|resource| view! { <NavLink resource=resource /> })
                            .collect_view()}
                    </ul>

                    // Account buttons (inert)
                    <div class="navbar-nav">
                        <button class="btn btn-outline-light me-2">
                            <i class="bi bi-person-circle me-1"></i>
                            "Profile"
                        </button>
                        <button class="btn btn-light">
                            <i class="bi bi-box-arrow-right me-1"></i>
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(resource: Resource) -> impl IntoView {
    let icon = format!("bi {} me-1", resource.nav_icon());

    view! {
        <li class="nav-item">
            <A href=resource.route() class="nav-link" active_class="active" exact=true>
                <i class=icon></i>
                {resource.label()}
            </A>
        </li>
    }
}

/// Home page hero with one feature card per highlighted view
#[component]
pub fn Home() -> impl IntoView {
    let features = vec![
        ("bi-activity text-primary", "Track Activities", "Log your workouts and monitor your progress", "/activities", "btn-primary", "View Activities"),
        ("bi-trophy text-warning", "Compete", "Challenge friends and climb the leaderboard", "/leaderboard", "btn-warning", "View Leaderboard"),
        ("bi-people text-success", "Join Teams", "Create or join fitness teams for motivation", "/teams", "btn-success", "Explore Teams"),
        ("bi-heart-pulse text-danger", "Get Workouts", "Discover personalized workout suggestions", "/workouts", "btn-danger", "Browse Workouts"),
    ];

    view! {
        <div class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-lg-8 text-center">
                    <div class="hero-section">
                        <h1 class="display-4 fw-bold text-primary mb-4">"Welcome to OctoFit Tracker"</h1>
                        <p class="lead text-muted mb-4">
                            "Your ultimate fitness companion for tracking activities, competing with teams, and achieving your health goals together."
                        </p>

                        <div class="row g-4 mt-5">
                            {features
                                .into_iter()
                                .map(|(icon, title, text, href, button, action)| view! {
                                    <FeatureCard
                                        icon=icon
                                        title=title
                                        text=text
                                        href=href
                                        button=button
                                        action=action
                                    />
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    href: &'static str,
    button: &'static str,
    action: &'static str,
) -> impl IntoView {
    let icon = format!("bi {}", icon);
    let button = format!("btn {}", button);

    view! {
        <div class="col-md-6">
            <div class="card h-100 border-0 shadow-sm">
                <div class="card-body text-center">
                    <i class=icon style="font-size: 3rem"></i>
                    <h5 class="card-title mt-3">{title}</h5>
                    <p class="card-text text-muted">{text}</p>
                    <A href=href class=button>
                        {action}
                    </A>
                </div>
            </div>
        </div>
    }
}

/// Page for paths no route matches
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="container mt-4">
            <div class="alert alert-warning" role="alert">
                <h4 class="alert-heading">"Page Not Found"</h4>
                <p>"No page at " <code>{move || location.pathname.get()}</code> "."</p>
                <A href="/" class="btn btn-primary" exact=true>
                    "Back Home"
                </A>
            </div>
        </div>
    }
}

/// Spinner shown while a view's fetch is in flight
#[component]
pub fn Loading(resource: Resource) -> impl IntoView {
    let label = format!("Loading {}...", resource.segment());

    view! {
        <div class="container mt-4">
            <div class="d-flex justify-content-center">
                <div class="spinner-border text-primary" role="status">
                    <span class="visually-hidden">{label}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="container mt-4">
            <div class="alert alert-danger" role="alert">
                <h4 class="alert-heading">"Error!"</h4>
                <p>{message}</p>
            </div>
        </div>
    }
}

#[component]
pub fn EmptyState(heading: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="alert alert-info" role="alert">
            <h4 class="alert-heading">{heading}</h4>
            <p>{message}</p>
        </div>
    }
}

/// Page body for any view state
pub fn resource_body<P: ResourcePage>(state: ViewState<P>) -> View {
    let content = match state {
        ViewState::Loading => return view! { <Loading resource=P::RESOURCE /> }.into_view(),
        ViewState::Error(message) => return view! { <ErrorPanel message=message /> }.into_view(),
        ViewState::Ready(items) if items.is_empty() => {
            view! { <EmptyState heading=P::EMPTY_HEADING message=P::EMPTY_MESSAGE /> }.into_view()
        }
        ViewState::Ready(items) => P::records_view(items),
    };

    view! {
        <div class="container mt-4">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h1 class="display-5 fw-bold text-primary">{P::heading()}</h1>
                {P::actions()}
            </div>
            {content}
        </div>
    }
    .into_view()
}

/// Body for the state provided by the request; loading when none was
fn routed_body<P: ResourcePage>() -> View {
    resource_body(use_context::<ViewState<P>>().unwrap_or_default())
}

#[component]
fn ActivitiesPage() -> impl IntoView {
    routed_body::<Activity>()
}

#[component]
fn LeaderboardPage() -> impl IntoView {
    routed_body::<LeaderboardEntry>()
}

#[component]
fn TeamsPage() -> impl IntoView {
    routed_body::<Team>()
}

#[component]
fn UsersPage() -> impl IntoView {
    routed_body::<User>()
}

#[component]
fn WorkoutsPage() -> impl IntoView {
    routed_body::<Workout>()
}
