use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::fields::{self, NOT_AVAILABLE};
use super::Record;

/// A registered user. `number` is the 1-based position in the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub number: usize,
    pub id: Option<String>,
    pub username: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub team: Option<String>,
    pub joined: Option<NaiveDate>,
    pub active: bool,
}

impl Record for User {
    fn decode(position: usize, value: &Value) -> Self {
        Self {
            number: position + 1,
            id: fields::first_text(value, &["id", "_id"]),
            username: fields::first_text(value, &["username"]),
            name: fields::first_text(value, &["name"]),
            first_name: fields::first_text(value, &["first_name"]),
            last_name: fields::first_text(value, &["last_name"]),
            email: fields::first_text(value, &["email"]),
            team: fields::first_text(value, &["team_name", "team"]),
            joined: fields::date_field(value, "date_joined"),
            active: value.get("is_active").is_some_and(fields::truthy),
        }
    }
}

impl User {
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Unknown User")
    }

    pub fn initial(&self) -> char {
        fields::initial(
            &[
                self.username.as_deref(),
                self.first_name.as_deref(),
                self.name.as_deref(),
            ],
            'U',
        )
    }

    /// First and last name, empty when neither is known
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{} {}", first, last).trim().to_string()
    }

    pub fn email_label(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn joined_label(&self) -> String {
        fields::format_date(self.joined)
    }

    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }

    pub fn status_badge(&self) -> &'static str {
        if self.active {
            "bg-success"
        } else {
            "bg-danger"
        }
    }
}
