use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::fields::{self, NOT_AVAILABLE};
use super::Record;

/// A logged activity session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: Option<String>,
    pub activity_type: Option<String>,
    /// Minutes
    pub duration: Option<f64>,
    pub calories: Option<f64>,
    pub date: Option<NaiveDate>,
    pub user: Option<String>,
}

impl Record for Activity {
    fn decode(_position: usize, value: &Value) -> Self {
        Self {
            id: fields::first_text(value, &["id", "_id"]),
            activity_type: fields::first_text(value, &["activity_type", "type"]),
            duration: fields::first_number(value, &["duration"]),
            calories: fields::first_number(value, &["calories_burned", "calories"]),
            date: fields::date_field(value, "date"),
            user: fields::first_text(value, &["user_name", "user", "user_email"]),
        }
    }
}

impl Activity {
    pub fn type_label(&self) -> &str {
        self.activity_type.as_deref().unwrap_or("Unknown Activity")
    }

    pub fn duration_label(&self) -> String {
        match self.duration {
            Some(minutes) => format!("{} min", fields::format_number(minutes)),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn calories_label(&self) -> String {
        self.calories
            .map(fields::format_number)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn date_label(&self) -> String {
        fields::format_date(self.date)
    }

    pub fn user_label(&self) -> &str {
        self.user.as_deref().unwrap_or("Unknown")
    }

    /// Bootstrap icon for the activity type
    pub fn icon(&self) -> &'static str {
        let kind = self
            .activity_type
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        match kind.as_str() {
            "running" | "cycling" => "bi-bicycle",
            "swimming" => "bi-water",
            "walking" => "bi-person-walking",
            "gym" => "bi-person-arms-up",
            "yoga" => "bi-heart",
            _ => "bi-activity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_record() {
        let activity = Activity::decode(
            0,
            &json!({
                "id": 7,
                "activity_type": "Swimming",
                "duration": 45,
                "calories_burned": 380,
                "date": "2025-08-20",
                "user_name": "diana"
            }),
        );

        assert_eq!(activity.id.as_deref(), Some("7"));
        assert_eq!(activity.type_label(), "Swimming");
        assert_eq!(activity.icon(), "bi-water");
        assert_eq!(activity.duration_label(), "45 min");
        assert_eq!(activity.calories_label(), "380");
        assert_eq!(activity.date_label(), "08/20/2025");
        assert_eq!(activity.user_label(), "diana");
    }

    #[test]
    fn test_fractional_values_shown_as_given() {
        let activity = Activity::decode(0, &json!({"duration": 12.75, "calories": 301.25}));

        assert_eq!(activity.duration_label(), "12.75 min");
        assert_eq!(activity.calories_label(), "301.25");
    }

    #[test]
    fn test_backend_field_names() {
        let activity = Activity::decode(
            0,
            &json!({
                "type": "running",
                "calories": 200,
                "user_email": "tony.stark@avengers.com"
            }),
        );

        assert_eq!(activity.type_label(), "running");
        assert_eq!(activity.icon(), "bi-bicycle");
        assert_eq!(activity.calories_label(), "200");
        assert_eq!(activity.user_label(), "tony.stark@avengers.com");
    }

    #[test]
    fn test_defaults() {
        let activity = Activity::decode(0, &json!({"duration": 0, "user": ""}));

        assert_eq!(activity.type_label(), "Unknown Activity");
        assert_eq!(activity.icon(), "bi-activity");
        assert_eq!(activity.duration_label(), "N/A");
        assert_eq!(activity.calories_label(), "N/A");
        assert_eq!(activity.date_label(), "N/A");
        assert_eq!(activity.user_label(), "Unknown");
    }
}
