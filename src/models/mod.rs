//! Resource Records
//!
//! Typed projections of the loosely-typed JSON records served by the API.
//! Every optional field and its fallback chain is resolved once, when a
//! record is decoded; rendering only reads the resolved fields.
//!
//! - [`Activity`] - a logged workout session
//! - [`LeaderboardEntry`] - a ranked user with totals
//! - [`Team`] - a group of users
//! - [`User`] - a registered user
//! - [`Workout`] - a suggested workout

mod activity;
pub mod fields;
mod leaderboard;
mod team;
mod user;
mod workout;

pub use activity::Activity;
pub use leaderboard::{LeaderboardEntry, RankTier};
pub use team::Team;
pub use user::User;
pub use workout::Workout;

use serde::Serialize;
use serde_json::Value;

/// A record decoded from one element of a normalized collection
pub trait Record: Sized + Serialize {
    /// Decode the element at `position` (0-based) in the collection.
    ///
    /// Never fails: missing fields take their documented defaults.
    fn decode(position: usize, value: &Value) -> Self;
}

/// Decode every element of a normalized collection, preserving order
pub fn decode_all<R: Record>(values: &[Value]) -> Vec<R> {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| R::decode(position, value))
        .collect()
}
