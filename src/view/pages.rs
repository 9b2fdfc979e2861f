//! Resource page components and table rows

use leptos::*;

use super::ResourcePage;
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::resource::Resource;

/// One labelled figure inside a card body
#[component]
fn Stat(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    let icon = format!("bi {} me-2", icon);

    view! {
        <div class="col-6">
            <div class="d-flex align-items-center">
                <i class=icon></i>
                <div>
                    <small class="text-muted d-block">{label}</small>
                    <strong>{value}</strong>
                </div>
            </div>
        </div>
    }
}

/// Inert footer buttons under a card
#[component]
fn CardFooter(children: Children) -> impl IntoView {
    view! {
        <div class="card-footer bg-transparent">
            <div class="btn-group w-100" role="group">
                {children()}
            </div>
        </div>
    }
}

#[component]
fn Avatar(initial: char, margin: &'static str) -> impl IntoView {
    view! {
        <div class=format!("avatar {}", margin)>
            <div
                class="bg-primary text-white rounded-circle d-flex align-items-center justify-content-center"
                style="width: 40px; height: 40px"
            >
                {initial.to_string()}
            </div>
        </div>
    }
}

/// Primary action beside a page heading
fn create_button(icon: &'static str, label: &'static str) -> View {
    let icon = format!("bi {} me-2", icon);

    view! {
        <button class="btn btn-success btn-lg">
            <i class=icon></i>
            {label}
        </button>
    }
    .into_view()
}

impl ResourcePage for Activity {
    const RESOURCE: Resource = Resource::Activities;
    const TITLE: &'static str = "Recent Activities";
    const EMPTY_HEADING: &'static str = "No Activities Found";
    const EMPTY_MESSAGE: &'static str =
        "Start tracking your fitness journey by logging your first activity!";
    const COLUMNS: &'static [&'static str] = &["Type", "Duration", "Calories", "Date", "User"];

    fn heading() -> View {
        Self::TITLE.into_view()
    }

    fn actions() -> View {
        create_button("bi-plus-circle", "Log Activity")
    }

    fn records_view(items: Vec<Self>) -> View {
        view! {
            <div class="row g-4">
                {items.into_iter().map(|activity| view! {
                    <div class="col-md-6 col-lg-4">
                        <div class="card h-100 shadow-sm border-0">
                            <div class="card-header bg-gradient bg-primary text-white">
                                <div class="d-flex align-items-center">
                                    <i class=format!("bi {} me-2", activity.icon())></i>
                                    <h5 class="card-title mb-0">{activity.type_label().to_string()}</h5>
                                </div>
                            </div>
                            <div class="card-body">
                                <div class="row g-3">
                                    <Stat icon="bi-clock text-primary" label="Duration" value=activity.duration_label() />
                                    <Stat icon="bi-fire text-danger" label="Calories" value=activity.calories_label() />
                                    <Stat icon="bi-calendar text-info" label="Date" value=activity.date_label() />
                                    <Stat icon="bi-person text-success" label="User" value=activity.user_label().to_string() />
                                </div>
                            </div>
                            <CardFooter>
                                <button class="btn btn-outline-primary btn-sm">"View Details"</button>
                                <button class="btn btn-outline-secondary btn-sm">"Edit"</button>
                            </CardFooter>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_view()
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.type_label().to_string(),
            self.duration_label(),
            self.calories_label(),
            self.date_label(),
            self.user_label().to_string(),
        ]
    }
}

impl ResourcePage for LeaderboardEntry {
    const RESOURCE: Resource = Resource::Leaderboard;
    const TITLE: &'static str = "Leaderboard";
    const EMPTY_HEADING: &'static str = "No Leaderboard Data";
    const EMPTY_MESSAGE: &'static str = "Start logging activities to see the competition heat up!";
    const COLUMNS: &'static [&'static str] = &["Rank", "User", "Activities", "Calories", "Duration"];

    fn heading() -> View {
        view! {
            <i class="bi bi-trophy me-3"></i>
            {Self::TITLE}
        }
        .into_view()
    }

    fn actions() -> View {
        view! {
            <div class="btn-group" role="group">
                <button class="btn btn-outline-primary">"This Week"</button>
                <button class="btn btn-primary">"All Time"</button>
                <button class="btn btn-outline-primary">"This Month"</button>
            </div>
        }
        .into_view()
    }

    fn records_view(items: Vec<Self>) -> View {
        let rows = items
            .into_iter()
            .map(|entry| {
                let tier = entry.tier();
                let podium = tier.medal().zip(tier.label()).map(|(medal, label)| {
                    view! { <small class="text-muted">{format!("{} {}", medal, label)}</small> }
                });
                let highlight = if tier.is_podium() { "table-warning" } else { "" };

                view! {
                    <tr class=highlight>
                        <td class="text-center">
                            <span class=format!("badge {} fs-6", tier.badge_class())>
                                <i class=format!("bi {} me-1", tier.icon())></i>
                                {entry.rank.to_string()}
                            </span>
                        </td>
                        <td>
                            <div class="d-flex align-items-center">
                                <Avatar initial=entry.initial() margin="me-3" />
                                <div>
                                    <div class="fw-bold">{entry.user_label().to_string()}</div>
                                    {podium}
                                </div>
                            </div>
                        </td>
                        <td class="text-center">
                            <span class="badge bg-info fs-6">{entry.activities_label()}</span>
                        </td>
                        <td class="text-center">
                            <span class="fw-bold text-danger">{entry.calories_label()}</span>
                        </td>
                        <td class="text-center">
                            <span class="fw-bold text-primary">{entry.duration_label()}</span>
                        </td>
                        <td class="text-center">
                            <button class="btn btn-outline-primary btn-sm">
                                <i class="bi bi-eye me-1"></i>
                                "View Profile"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div class="card shadow-sm border-0">
                <div class="card-header bg-gradient bg-primary text-white">
                    <h5 class="mb-0">"Top Performers"</h5>
                </div>
                <div class="table-responsive">
                    <table class="table table-hover mb-0">
                        <thead class="table-light">
                            <tr>
                                <th scope="col" class="text-center">"Rank"</th>
                                <th scope="col">"User"</th>
                                <th scope="col" class="text-center">"Activities"</th>
                                <th scope="col" class="text-center">"Calories"</th>
                                <th scope="col" class="text-center">"Duration"</th>
                                <th scope="col" class="text-center">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>
        }
        .into_view()
    }

    fn row(&self) -> Vec<String> {
        let rank = match self.tier().label() {
            Some(label) => format!("{} ({})", self.rank, label),
            None => self.rank.to_string(),
        };
        vec![
            rank,
            self.user_label().to_string(),
            self.activities_label(),
            self.calories_label(),
            self.duration_label(),
        ]
    }
}

impl ResourcePage for Team {
    const RESOURCE: Resource = Resource::Teams;
    const TITLE: &'static str = "Teams";
    const EMPTY_HEADING: &'static str = "No Teams Found";
    const EMPTY_MESSAGE: &'static str =
        "There are currently no teams available. Be the first to create one!";
    const COLUMNS: &'static [&'static str] = &["Name", "Members", "Captain", "Created", "Description"];

    fn heading() -> View {
        Self::TITLE.into_view()
    }

    fn actions() -> View {
        create_button("bi-plus-circle", "Create Team")
    }

    fn records_view(items: Vec<Self>) -> View {
        view! {
            <div class="row g-4">
                {items.into_iter().map(|team| view! {
                    <div class="col-md-6 col-lg-4">
                        <div class="card h-100 shadow-sm border-0">
                            <div class="card-header bg-primary text-white">
                                <h5 class="card-title mb-0">{team.name_label().to_string()}</h5>
                            </div>
                            <div class="card-body">
                                <p class="card-text text-muted">{team.description_label().to_string()}</p>
                                <ul class="list-unstyled">
                                    <li><strong>"Members:"</strong> {format!(" {}", team.members)}</li>
                                    <li><strong>"Created:"</strong> {format!(" {}", team.created_label())}</li>
                                    <li><strong>"Captain:"</strong> {format!(" {}", team.captain_label())}</li>
                                </ul>
                            </div>
                            <CardFooter>
                                <button class="btn btn-outline-primary btn-sm">"View Details"</button>
                                <button class="btn btn-outline-success btn-sm">"Join Team"</button>
                            </CardFooter>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_view()
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name_label().to_string(),
            self.members.to_string(),
            self.captain_label().to_string(),
            self.created_label(),
            self.description_label().to_string(),
        ]
    }
}

impl ResourcePage for User {
    const RESOURCE: Resource = Resource::Users;
    const TITLE: &'static str = "Users";
    const EMPTY_HEADING: &'static str = "No Users Found";
    const EMPTY_MESSAGE: &'static str = "No users are currently registered in the system.";
    const COLUMNS: &'static [&'static str] = &["#", "Name", "Email", "Team", "Join Date", "Status"];

    fn heading() -> View {
        Self::TITLE.into_view()
    }

    fn actions() -> View {
        create_button("bi-person-plus", "Add User")
    }

    fn records_view(items: Vec<Self>) -> View {
        let rows = items
            .into_iter()
            .map(|user| {
                let team = match user.team.clone() {
                    Some(team) => view! { <span class="badge bg-primary">{team}</span> },
                    None => view! { <span class="badge bg-secondary">"No Team"</span> },
                };

                view! {
                    <tr>
                        <th scope="row">{user.number.to_string()}</th>
                        <td>
                            <div class="d-flex align-items-center">
                                <Avatar initial=user.initial() margin="me-2" />
                                <div>
                                    <div class="fw-bold">{user.display_name().to_string()}</div>
                                    <small class="text-muted">{user.full_name()}</small>
                                </div>
                            </div>
                        </td>
                        <td>{user.email_label().to_string()}</td>
                        <td>{team}</td>
                        <td>{user.joined_label()}</td>
                        <td>
                            <span class=format!("badge {}", user.status_badge())>{user.status_label()}</span>
                        </td>
                        <td>
                            <div class="btn-group" role="group">
                                <button class="btn btn-outline-primary btn-sm">"View"</button>
                                <button class="btn btn-outline-secondary btn-sm">"Edit"</button>
                            </div>
                        </td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div class="table-responsive">
                <table class="table table-hover table-striped">
                    <thead class="table-dark">
                        <tr>
                            <th scope="col">"#"</th>
                            <th scope="col">"Name"</th>
                            <th scope="col">"Email"</th>
                            <th scope="col">"Team"</th>
                            <th scope="col">"Join Date"</th>
                            <th scope="col">"Status"</th>
                            <th scope="col">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
        .into_view()
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.display_name().to_string(),
            self.email_label().to_string(),
            self.team.clone().unwrap_or_else(|| "No Team".to_string()),
            self.joined_label(),
            self.status_label().to_string(),
        ]
    }
}

impl ResourcePage for Workout {
    const RESOURCE: Resource = Resource::Workouts;
    const TITLE: &'static str = "Workouts";
    const EMPTY_HEADING: &'static str = "No Workouts Found";
    const EMPTY_MESSAGE: &'static str =
        "No workout suggestions are currently available. Check back later or create your own!";
    const COLUMNS: &'static [&'static str] =
        &["Name", "Difficulty", "Duration", "Calories", "Exercises"];

    fn heading() -> View {
        Self::TITLE.into_view()
    }

    fn actions() -> View {
        create_button("bi-plus-circle", "Create Workout")
    }

    fn records_view(items: Vec<Self>) -> View {
        view! {
            <div class="row g-4">
                {items.into_iter().map(|workout| view! {
                    <div class="col-md-6 col-xl-4">
                        <div class="card h-100 shadow-sm border-0">
                            <div class="card-header bg-gradient bg-primary text-white">
                                <div class="d-flex justify-content-between align-items-center">
                                    <h5 class="card-title mb-0">{workout.name_label().to_string()}</h5>
                                    <span class=format!("badge {}", workout.difficulty_badge())>
                                        {workout.difficulty_label().to_string()}
                                    </span>
                                </div>
                            </div>
                            <div class="card-body">
                                <p class="card-text text-muted">{workout.description_label().to_string()}</p>
                                <div class="row g-3">
                                    <Stat icon="bi-clock text-primary" label="Duration" value=workout.duration_label() />
                                    <Stat icon="bi-fire text-danger" label="Calories" value=workout.calories_label() />
                                </div>
                                {exercise_list(&workout)}
                            </div>
                            <CardFooter>
                                <button class="btn btn-outline-primary btn-sm">"View Details"</button>
                                <button class="btn btn-primary btn-sm">"Start Workout"</button>
                            </CardFooter>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_view()
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name_label().to_string(),
            self.difficulty_label().to_string(),
            self.duration_label(),
            self.calories_label(),
            self.exercises.join(", "),
        ]
    }
}

/// First exercises of a workout, with a count of the rest
fn exercise_list(workout: &Workout) -> Option<View> {
    let (shown, more) = workout.exercise_preview();
    if shown.is_empty() {
        return None;
    }

    let items = shown
        .iter()
        .map(|exercise| view! { <li class="small text-muted">{format!("• {}", exercise)}</li> })
        .collect_view();
    let overflow = (more > 0).then(|| {
        view! { <li class="small text-muted">{format!("• And {} more...", more)}</li> }
    });

    Some(
        view! {
            <div class="mt-3">
                <h6 class="text-primary">"Exercises:"</h6>
                <ul class="list-unstyled">
                    {items}
                    {overflow}
                </ul>
            </div>
        }
        .into_view(),
    )
}
