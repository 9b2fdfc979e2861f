//! Seed Data
//!
//! Superhero teams, users, workouts and activities, generated from a fixed
//! seed so repeated runs against the same date produce the same data.

use chrono::{Duration, NaiveDate, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use serde_json::Value;

use crate::resource::Resource;

pub const DEFAULT_SEED: u64 = 0x0C70_F17;

pub const ACTIVITY_TYPES: [&str; 6] = [
    "running",
    "strength training",
    "swimming",
    "cycling",
    "flying",
    "combat training",
];

const TEAM_MARVEL: &str = "Team Marvel";
const TEAM_DC: &str = "Team DC";

const MARVEL_HEROES: [(&str, &str); 6] = [
    ("tony.stark@avengers.com", "Tony Stark"),
    ("steve.rogers@avengers.com", "Steve Rogers"),
    ("natasha.romanoff@avengers.com", "Natasha Romanoff"),
    ("bruce.banner@avengers.com", "Bruce Banner"),
    ("thor.odinson@asgard.com", "Thor Odinson"),
    ("peter.parker@spiderman.com", "Peter Parker"),
];

const DC_HEROES: [(&str, &str); 6] = [
    ("clark.kent@dailyplanet.com", "Clark Kent"),
    ("bruce.wayne@wayneenterprises.com", "Bruce Wayne"),
    ("diana.prince@themyscira.com", "Diana Prince"),
    ("barry.allen@ccpd.com", "Barry Allen"),
    ("arthur.curry@atlantis.com", "Arthur Curry"),
    ("hal.jordan@greenlantern.com", "Hal Jordan"),
];

/// (name, description, difficulty)
const WORKOUTS: [(&str, &str, &str); 6] = [
    ("Super Strength Training", "Build incredible strength like a superhero", "Hard"),
    ("Speed Training", "Lightning fast cardio workout", "Medium"),
    ("Flexibility & Agility", "Improve flexibility and agility", "Easy"),
    ("Hero Endurance Challenge", "Ultimate endurance test for heroes", "Hard"),
    ("Combat Training", "Practice fighting techniques", "Medium"),
    ("Flying Practice", "Aerial maneuvers and flying skills", "Easy"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoTeam {
    pub id: u32,
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoUser {
    pub id: u32,
    pub email: String,
    pub name: String,
    pub team_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoWorkout {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoActivity {
    pub id: u32,
    pub user_email: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Minutes
    pub duration: u32,
    pub calories: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoLeaderboardEntry {
    pub id: u32,
    pub user_email: String,
    pub score: u32,
    pub total_activities: usize,
    pub total_duration: u32,
}

/// Every collection served by the demo API
#[derive(Debug, Clone, PartialEq)]
pub struct DemoData {
    pub teams: Vec<DemoTeam>,
    pub users: Vec<DemoUser>,
    pub workouts: Vec<DemoWorkout>,
    pub activities: Vec<DemoActivity>,
    pub leaderboard: Vec<DemoLeaderboardEntry>,
}

impl DemoData {
    /// Generate data from `seed`, with activity dates counted back from `today`
    pub fn generate(seed: u64, today: NaiveDate) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let users: Vec<DemoUser> = MARVEL_HEROES
            .iter()
            .map(|hero| (hero, TEAM_MARVEL))
            .chain(DC_HEROES.iter().map(|hero| (hero, TEAM_DC)))
            .enumerate()
            .map(|(i, ((email, name), team))| DemoUser {
                id: i as u32 + 1,
                email: email.to_string(),
                name: name.to_string(),
                team_name: team.to_string(),
            })
            .collect();

        let teams = [TEAM_MARVEL, TEAM_DC]
            .iter()
            .enumerate()
            .map(|(i, team)| DemoTeam {
                id: i as u32 + 1,
                name: team.to_string(),
                members: users
                    .iter()
                    .filter(|u| u.team_name == *team)
                    .map(|u| u.email.clone())
                    .collect(),
            })
            .collect();

        let workouts = WORKOUTS
            .iter()
            .enumerate()
            .map(|(i, (name, description, difficulty))| DemoWorkout {
                id: i as u32 + 1,
                name: name.to_string(),
                description: description.to_string(),
                difficulty: difficulty.to_string(),
            })
            .collect();

        let mut activities = Vec::new();
        for user in &users {
            let count = rng.gen_range(5..=10);
            for _ in 0..count {
                let days_ago = rng.gen_range(1..=30);
                let activity_type = ACTIVITY_TYPES[rng.gen_range(0..ACTIVITY_TYPES.len())];
                activities.push(DemoActivity {
                    id: activities.len() as u32 + 1,
                    user_email: user.email.clone(),
                    activity_type: activity_type.to_string(),
                    duration: rng.gen_range(15..=120),
                    calories: rng.gen_range(100..=800),
                    date: today - Duration::days(days_ago),
                });
            }
        }

        let mut leaderboard: Vec<DemoLeaderboardEntry> = users
            .iter()
            .map(|user| {
                let own = activities.iter().filter(|a| a.user_email == user.email);
                let total_calories: u32 = own.clone().map(|a| a.calories).sum();
                DemoLeaderboardEntry {
                    id: user.id,
                    user_email: user.email.clone(),
                    score: total_calories + rng.gen_range(0..=500),
                    total_activities: own.clone().count(),
                    total_duration: own.map(|a| a.duration).sum(),
                }
            })
            .collect();
        leaderboard.sort_by(|a, b| b.score.cmp(&a.score));

        Self {
            teams,
            users,
            workouts,
            activities,
            leaderboard,
        }
    }

    /// Collection for `resource` as a JSON array
    pub fn collection(&self, resource: Resource) -> serde_json::Result<Value> {
        match resource {
            Resource::Activities => serde_json::to_value(&self.activities),
            Resource::Leaderboard => serde_json::to_value(&self.leaderboard),
            Resource::Teams => serde_json::to_value(&self.teams),
            Resource::Users => serde_json::to_value(&self.users),
            Resource::Workouts => serde_json::to_value(&self.workouts),
        }
    }
}

impl Default for DemoData {
    fn default() -> Self {
        Self::generate(DEFAULT_SEED, Utc::now().date_naive())
    }
}
