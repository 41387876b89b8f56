use serde::{Deserialize, Serialize};

use crate::config::constants::{MISSING_STAT, UNKNOWN};

/// A normalized player entry, produced by both normalizers.
/// Every field is populated; absent upstream data is replaced by a sentinel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRecord {
    pub username: String,
    pub period_kills_delta: i64,
    pub total_kills: String,
    pub total_deaths: String,
    pub kdr: String,
    pub streak: String,
    pub elo: String,
    pub mode: String,
    pub source_url: Option<String>,
}

impl PlayerRecord {
    /// A record carrying only sentinels for the given name.
    pub fn placeholder(username: impl Into<String>) -> Self {
        let username = username.into();
        let username = if username.trim().is_empty() {
            UNKNOWN.to_string()
        } else {
            username
        };

        Self {
            username,
            period_kills_delta: 0,
            total_kills: MISSING_STAT.to_string(),
            total_deaths: MISSING_STAT.to_string(),
            kdr: MISSING_STAT.to_string(),
            streak: MISSING_STAT.to_string(),
            elo: MISSING_STAT.to_string(),
            mode: UNKNOWN.to_string(),
            source_url: None,
        }
    }

    /// Delta with an explicit sign, e.g. `+9` or `-2`.
    pub fn signed_delta(&self) -> String {
        format!("{:+}", self.period_kills_delta)
    }
}
