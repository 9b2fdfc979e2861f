use serde::Serialize;
use serde_json::Value;

use super::fields;
use super::Record;

/// A ranked leaderboard row. Rank is the 1-based position in the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user: Option<String>,
    pub activities: f64,
    pub calories: f64,
    /// Minutes
    pub duration: f64,
}

/// Podium placement of a rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Standard,
}

impl RankTier {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => RankTier::Gold,
            2 => RankTier::Silver,
            3 => RankTier::Bronze,
            _ => RankTier::Standard,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            RankTier::Gold => "bg-warning text-dark",
            RankTier::Silver => "bg-secondary",
            RankTier::Bronze => "bg-dark",
            RankTier::Standard => "bg-primary",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RankTier::Gold => "bi-trophy-fill",
            RankTier::Silver => "bi-award-fill",
            RankTier::Bronze => "bi-star-fill",
            RankTier::Standard => "bi-person-fill",
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            RankTier::Gold => Some("Champion"),
            RankTier::Silver => Some("Runner-up"),
            RankTier::Bronze => Some("Third Place"),
            RankTier::Standard => None,
        }
    }

    pub fn medal(&self) -> Option<&'static str> {
        match self {
            RankTier::Gold => Some("🥇"),
            RankTier::Silver => Some("🥈"),
            RankTier::Bronze => Some("🥉"),
            RankTier::Standard => None,
        }
    }

    pub fn is_podium(&self) -> bool {
        !matches!(self, RankTier::Standard)
    }
}

impl Record for LeaderboardEntry {
    fn decode(position: usize, value: &Value) -> Self {
        Self {
            rank: position + 1,
            user: fields::first_text(value, &["user_name", "username", "user", "user_email"]),
            activities: fields::first_number(value, &["total_activities", "activity_count"])
                .unwrap_or(0.0),
            calories: fields::first_number(value, &["total_calories", "calories_burned", "score"])
                .unwrap_or(0.0),
            duration: fields::first_number(value, &["total_duration", "duration"]).unwrap_or(0.0),
        }
    }
}

impl LeaderboardEntry {
    pub fn tier(&self) -> RankTier {
        RankTier::for_rank(self.rank)
    }

    pub fn user_label(&self) -> &str {
        self.user.as_deref().unwrap_or("Unknown User")
    }

    pub fn initial(&self) -> char {
        fields::initial(&[self.user.as_deref()], 'U')
    }

    pub fn activities_label(&self) -> String {
        fields::format_number(self.activities)
    }

    pub fn calories_label(&self) -> String {
        fields::format_number(self.calories)
    }

    pub fn duration_label(&self) -> String {
        format!("{} min", fields::format_number(self.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rank_from_position() {
        let entry = LeaderboardEntry::decode(0, &json!({"username": "clark"}));
        assert_eq!(entry.rank, 1);
        assert_eq!(entry.tier(), RankTier::Gold);
        assert_eq!(entry.user_label(), "clark");
        assert_eq!(entry.initial(), 'C');

        let entry = LeaderboardEntry::decode(9, &json!({}));
        assert_eq!(entry.rank, 10);
        assert_eq!(entry.tier(), RankTier::Standard);
        assert!(!entry.tier().is_podium());
    }

    #[test]
    fn test_totals_fallbacks() {
        let entry = LeaderboardEntry::decode(
            1,
            &json!({
                "activity_count": 12,
                "calories_burned": 4200,
                "duration": 310
            }),
        );
        assert_eq!(entry.activities_label(), "12");
        assert_eq!(entry.calories_label(), "4200");
        assert_eq!(entry.duration_label(), "310 min");

        let score_only = LeaderboardEntry::decode(2, &json!({"user_email": "a@b.c", "score": 950}));
        assert_eq!(score_only.calories_label(), "950");
        assert_eq!(score_only.user_label(), "a@b.c");
    }

    #[test]
    fn test_defaults() {
        let entry = LeaderboardEntry::decode(4, &json!(null));
        assert_eq!(entry.user_label(), "Unknown User");
        assert_eq!(entry.initial(), 'U');
        assert_eq!(entry.activities_label(), "0");
        assert_eq!(entry.duration_label(), "0 min");
    }

    #[test]
    fn test_tier_presentation() {
        assert_eq!(RankTier::for_rank(1).badge_class(), "bg-warning text-dark");
        assert_eq!(RankTier::for_rank(2).icon(), "bi-award-fill");
        assert_eq!(RankTier::for_rank(3).label(), Some("Third Place"));
        assert_eq!(RankTier::for_rank(4).label(), None);
        assert_eq!(RankTier::for_rank(4).badge_class(), "bg-primary");
    }
}
