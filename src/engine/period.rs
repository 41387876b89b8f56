use serde::{Deserialize, Serialize};

/// Ranking window of a leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Value of the `period` query parameter understood by the leaderboard API.
    pub fn query_value(self) -> &'static str {
        match self {
            Period::Daily => "24h",
            Period::Weekly => "7d",
            Period::Monthly => "30d",
        }
    }

    /// Upper-case label used in card titles.
    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "DAILY",
            Period::Weekly => "WEEKLY",
            Period::Monthly => "MONTHLY",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Daily => write!(f, "daily"),
            Period::Weekly => write!(f, "weekly"),
            Period::Monthly => write!(f, "monthly"),
        }
    }
}
