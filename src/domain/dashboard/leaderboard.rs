use serde::{Deserialize, Serialize};

/// A named figure on the leaderboard, e.g. `Sandwiches` / `$5,000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub value: String,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Leaderboard summary shown beside the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub top_performer: LeaderboardEntry,
    pub needs_attention: LeaderboardEntry,
}
