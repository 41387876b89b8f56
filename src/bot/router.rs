// * Command Router
// * Pure mapping from chat text to an action. Accepted spellings are a fixed
// * table; nothing is matched by prefix except the leaderboard usage hint.

use crate::engine::period::Period;

/// A command the handler can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Leaderboard(Period),
    Lookup(String),
}

impl Command {
    /// Metrics/log label.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Leaderboard(_) => "leaderboard",
            Command::Lookup(_) => "lookup",
        }
    }
}

/// Which usage hint to send back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Leaderboard,
    Lookup,
    General,
}

impl Usage {
    pub fn text(self, prefix: &str) -> String {
        let p = prefix;
        match self {
            Usage::Leaderboard => format!("❌ Use: {p}leaderd | {p}leaderw | {p}leaderm"),
            Usage::Lookup => format!("❌ Use: {p}lookup <username>"),
            Usage::General => format!(
                "Commands:\n\
                 `{p}leaderd` daily top 3 by kills gained\n\
                 `{p}leaderw` weekly top 3 by kills gained\n\
                 `{p}leaderm` monthly top 3 by kills gained\n\
                 `{p}lookup <username>` highscores stats for a player"
            ),
        }
    }
}

/// Outcome of routing one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Ignore,
    Run(Command),
    Usage(Usage),
}

// * Accepted first tokens (lowercase, prefix stripped)
const DAILY_TOKENS: &[&str] = &["leaderd", "leaderboarddaily"];
const WEEKLY_TOKENS: &[&str] = &["leaderw", "leaderboardweekly"];
const MONTHLY_TOKENS: &[&str] = &["leaderm", "leaderboardmonthly", "leaderboardmontly"];
const LOOKUP_TOKEN: &str = "lookup";
const HELP_TOKEN: &str = "help";
const LEADERBOARD_FAMILY: &str = "leaderboard";

#[derive(Debug, Clone)]
pub struct CommandRouter {
    prefix: String,
}

impl CommandRouter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn route(&self, content: &str, author_is_bot: bool) -> Route {
        if author_is_bot || self.prefix.is_empty() || !content.starts_with(self.prefix.as_str()) {
            return Route::Ignore;
        }

        let mut tokens = content.split_whitespace();
        let head = match tokens.next().and_then(|t| t.strip_prefix(self.prefix.as_str())) {
            Some(head) if !head.is_empty() => head.to_lowercase(),
            _ => return Route::Ignore,
        };
        let argument = tokens.collect::<Vec<_>>().join(" ");

        let token = head.as_str();
        if DAILY_TOKENS.contains(&token) {
            Route::Run(Command::Leaderboard(Period::Daily))
        } else if WEEKLY_TOKENS.contains(&token) {
            Route::Run(Command::Leaderboard(Period::Weekly))
        } else if MONTHLY_TOKENS.contains(&token) {
            Route::Run(Command::Leaderboard(Period::Monthly))
        } else if token == LOOKUP_TOKEN {
            if argument.is_empty() {
                Route::Usage(Usage::Lookup)
            } else {
                Route::Run(Command::Lookup(argument))
            }
        } else if token == HELP_TOKEN {
            Route::Usage(Usage::General)
        } else if token.starts_with(LEADERBOARD_FAMILY) {
            Route::Usage(Usage::Leaderboard)
        } else {
            Route::Ignore
        }
    }
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new(crate::config::constants::DEFAULT_COMMAND_PREFIX)
    }
}
