//! Resource Catalog
//!
//! The five named collections served by the fitness API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named collection served by the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Activities,
    Leaderboard,
    Teams,
    Users,
    Workouts,
}

impl Resource {
    /// All resources in navigation order
    pub const ALL: [Resource; 5] = [
        Resource::Activities,
        Resource::Leaderboard,
        Resource::Teams,
        Resource::Users,
        Resource::Workouts,
    ];

    /// Path segment used both in the API URL and the front-end route
    pub fn segment(&self) -> &'static str {
        match self {
            Resource::Activities => "activities",
            Resource::Leaderboard => "leaderboard",
            Resource::Teams => "teams",
            Resource::Users => "users",
            Resource::Workouts => "workouts",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Activities => "Activities",
            Resource::Leaderboard => "Leaderboard",
            Resource::Teams => "Teams",
            Resource::Users => "Users",
            Resource::Workouts => "Workouts",
        }
    }

    /// Bootstrap icon shown in the navigation bar
    pub fn nav_icon(&self) -> &'static str {
        match self {
            Resource::Activities => "bi-list-ul",
            Resource::Leaderboard => "bi-trophy",
            Resource::Teams => "bi-people",
            Resource::Users => "bi-person",
            Resource::Workouts => "bi-heart-pulse",
        }
    }

    /// Front-end route for this resource
    pub fn route(&self) -> String {
        format!("/{}", self.segment())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Returned when a string names no known resource
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown resource: {0} (expected one of activities, leaderboard, teams, users, workouts)")]
pub struct UnknownResource(pub String);

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_matches('/').to_ascii_lowercase();
        Resource::ALL
            .into_iter()
            .find(|r| r.segment() == wanted)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource() {
        assert_eq!("teams".parse::<Resource>().unwrap(), Resource::Teams);
        assert_eq!("/Workouts/".parse::<Resource>().unwrap(), Resource::Workouts);
        assert!("profile".parse::<Resource>().is_err());
    }

    #[test]
    fn test_segment_roundtrip() {
        for resource in Resource::ALL {
            assert_eq!(resource.segment().parse::<Resource>().unwrap(), resource);
            assert_eq!(resource.route(), format!("/{}", resource));
        }
    }
}
