use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::fields::{self, NOT_AVAILABLE};
use super::Record;

/// A team of users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub members: u64,
    pub created: Option<NaiveDate>,
    pub captain: Option<String>,
}

impl Record for Team {
    fn decode(_position: usize, value: &Value) -> Self {
        let members = fields::first_number(value, &["member_count"])
            .map(|n| n.max(0.0) as u64)
            .or_else(|| {
                value
                    .get("members")
                    .and_then(Value::as_array)
                    .map(|m| m.len() as u64)
            })
            .unwrap_or(0);

        Self {
            id: fields::first_text(value, &["id", "_id"]),
            name: fields::first_text(value, &["name"]),
            description: fields::first_text(value, &["description"]),
            members,
            created: fields::date_field(value, "created_at"),
            captain: fields::first_text(value, &["captain_name", "captain"]),
        }
    }
}

impl Team {
    pub fn name_label(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Team")
    }

    pub fn description_label(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or("No description available")
    }

    pub fn created_label(&self) -> String {
        fields::format_date(self.created)
    }

    pub fn captain_label(&self) -> &str {
        self.captain.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_team() {
        let team = Team::decode(
            0,
            &json!({
                "id": 1,
                "name": "Alpha",
                "description": "Morning runners",
                "member_count": 8,
                "created_at": "2025-01-05T08:00:00Z",
                "captain_name": "Steve Rogers"
            }),
        );

        assert_eq!(team.name_label(), "Alpha");
        assert_eq!(team.description_label(), "Morning runners");
        assert_eq!(team.members, 8);
        assert_eq!(team.created_label(), "01/05/2025");
        assert_eq!(team.captain_label(), "Steve Rogers");
    }

    #[test]
    fn test_members_from_array() {
        let team = Team::decode(0, &json!({"member_count": 0, "members": ["a", "b", "c"]}));
        assert_eq!(team.members, 3);
    }

    #[test]
    fn test_defaults() {
        let team = Team::decode(0, &json!({"captain": null}));
        assert_eq!(team.name_label(), "Unnamed Team");
        assert_eq!(team.description_label(), "No description available");
        assert_eq!(team.members, 0);
        assert_eq!(team.created_label(), "N/A");
        assert_eq!(team.captain_label(), "N/A");
    }
}
