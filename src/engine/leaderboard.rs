// * Leaderboard Normalizer
// * Turns whatever the leaderboard API returned into a ranked Top-N list.
// *
// * Logic:
// * 1. Resolve the entry list (bare array or a known wrapper key).
// * 2. Read each entry's period kill delta (default 0).
// * 3. Drop entries whose delta is not positive.
// * 4. Stable sort by delta, descending.
// * 5. Keep the first N and fill every other field with its default.

use serde_json::Value;
use tracing::debug;

use crate::config::constants::{FieldKeys, MISSING_STAT, UNKNOWN};
use crate::engine::fields::{integer_field_or, text_field_or};
use crate::engine::payload::LeaderboardPayload;
use crate::engine::record::PlayerRecord;

/// Normalizes a raw leaderboard payload. Never fails; unknown shapes yield an empty list.
pub fn normalize_leaderboard(raw: &Value, keys: &FieldKeys, top_n: usize) -> Vec<PlayerRecord> {
    let payload = LeaderboardPayload::resolve(raw);

    let mut ranked: Vec<(i64, &Value)> = payload
        .entries()
        .iter()
        .filter(|entry| entry.is_object())
        .map(|entry| (integer_field_or(entry, keys.period_delta, 0), entry))
        .filter(|(delta, _)| *delta > 0)
        .collect();

    // * sort_by is stable: equal deltas keep API order
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.truncate(top_n);

    debug!(
        shape = payload.shape_name(),
        entries = payload.entries().len(),
        ranked = ranked.len(),
        "Leaderboard payload normalized"
    );

    ranked
        .into_iter()
        .map(|(delta, entry)| to_record(entry, delta, keys))
        .collect()
}

fn to_record(entry: &Value, delta: i64, keys: &FieldKeys) -> PlayerRecord {
    PlayerRecord {
        username: text_field_or(entry, keys.username, UNKNOWN),
        period_kills_delta: delta,
        total_kills: text_field_or(entry, keys.total_kills, MISSING_STAT),
        total_deaths: text_field_or(entry, keys.total_deaths, MISSING_STAT),
        kdr: text_field_or(entry, keys.kdr, MISSING_STAT),
        streak: text_field_or(entry, keys.streak, MISSING_STAT),
        elo: text_field_or(entry, keys.elo, MISSING_STAT),
        mode: text_field_or(entry, keys.mode, UNKNOWN),
        source_url: None,
    }
}
