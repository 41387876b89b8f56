// * Command Handler
// * Runs one routed command against a StatsSource and always produces a reply.
// * Runtime failures stop at this boundary: they become error replies and are
// * never propagated to the event loop.

use chrono::Utc;
use tracing::{info, warn};

use crate::bot::card::{clip_name, leaderboard_card, lookup_card, Card};
use crate::bot::router::Command;
use crate::config::constants::{
    FieldKeys, LookupColumns, HIGHSCORES_COLUMNS, LEADERBOARD_FIELD_KEYS, LEADERBOARD_TOP_N,
};
use crate::engine::html_rows::find_player_row;
use crate::engine::leaderboard::normalize_leaderboard;
use crate::engine::lookup::normalize_lookup;
use crate::engine::period::Period;
use crate::network::client::StatsSource;
use crate::ops::telemetry::record_command;

/// What to send back for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Card(Card),
    Text(String),
}

pub struct CommandHandler<S> {
    source: S,
    field_keys: FieldKeys,
    columns: LookupColumns,
    top_n: usize,
}

impl<S: StatsSource> CommandHandler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            field_keys: LEADERBOARD_FIELD_KEYS,
            columns: HIGHSCORES_COLUMNS,
            top_n: LEADERBOARD_TOP_N,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn handle(&self, command: &Command) -> Reply {
        record_command(command.kind());
        match command {
            Command::Leaderboard(period) => self.leaderboard(*period).await,
            Command::Lookup(username) => self.lookup(username).await,
        }
    }

    async fn leaderboard(&self, period: Period) -> Reply {
        let raw = match self.source.fetch_leaderboard(period).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(period = %period, error = %e, "Leaderboard fetch failed");
                return Reply::Text(format!(
                    "❌ Failed to fetch {} leaderboard ({}).",
                    period,
                    e.user_reason()
                ));
            }
        };

        let records = normalize_leaderboard(&raw, &self.field_keys, self.top_n);
        info!(period = %period, entries = records.len(), "Leaderboard ready");

        Reply::Card(leaderboard_card(
            period,
            &records,
            &self.source.leaderboard_host(),
            Utc::now(),
        ))
    }

    async fn lookup(&self, username: &str) -> Reply {
        let shown = sanitize_name(username);

        let page = match self.source.fetch_highscores(username).await {
            Ok(page) => page,
            Err(e) => {
                warn!(username = %username, error = %e, "Highscores fetch failed");
                return Reply::Text(format!(
                    "❌ Failed to fetch highscores for `{}` ({}).",
                    shown,
                    e.user_reason()
                ));
            }
        };

        let Some(cells) = find_player_row(&page.html, username) else {
            info!(username = %username, "Player not found on highscores page");
            return Reply::Text(format!(
                "❌ Player `{}` not found on {} highscores.",
                shown,
                self.source.highscores_host()
            ));
        };

        let record = normalize_lookup(username, &cells, &self.columns, &page.url);
        info!(username = %username, cells = cells.len(), "Lookup ready");

        Reply::Card(lookup_card(&record, &self.source.highscores_host(), Utc::now()))
    }
}

// * Backticks would break out of the inline code span
fn sanitize_name(name: &str) -> String {
    clip_name(name).replace('`', "'")
}
