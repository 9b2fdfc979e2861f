use serde::Serialize;
use serde_json::Value;

use super::fields::{self, NOT_AVAILABLE};
use super::Record;

/// Exercises listed on a workout card before collapsing the rest
pub const EXERCISE_PREVIEW: usize = 3;

/// A suggested workout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    pub id: Option<String>,
    pub name: Option<String>,
    pub difficulty: Option<String>,
    pub description: Option<String>,
    /// Minutes
    pub duration: Option<f64>,
    pub calories: Option<f64>,
    pub exercises: Vec<String>,
}

impl Record for Workout {
    fn decode(_position: usize, value: &Value) -> Self {
        let exercises = value
            .get("exercises")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        fields::first_text(item, &["name"]).or_else(|| fields::scalar_text(item))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: fields::first_text(value, &["id", "_id"]),
            name: fields::first_text(value, &["name", "title"]),
            difficulty: fields::first_text(value, &["difficulty"]),
            description: fields::first_text(value, &["description"]),
            duration: fields::first_number(value, &["duration", "estimated_duration"]),
            calories: fields::first_number(value, &["estimated_calories", "calories"]),
            exercises,
        }
    }
}

impl Workout {
    pub fn name_label(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Workout")
    }

    pub fn difficulty_label(&self) -> &str {
        self.difficulty.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn description_label(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or("No description available")
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

    /// Bootstrap badge class for the difficulty level
    pub fn difficulty_badge(&self) -> &'static str {
        let level = self
            .difficulty
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        match level.as_str() {
            "easy" | "beginner" => "bg-success",
            "medium" | "intermediate" => "bg-warning",
            "hard" | "advanced" => "bg-danger",
            _ => "bg-secondary",
        }
    }

    /// First few exercises and how many were left out
    pub fn exercise_preview(&self) -> (&[String], usize) {
        let shown = self.exercises.len().min(EXERCISE_PREVIEW);
        (&self.exercises[..shown], self.exercises.len() - shown)
    }
}
