// * Lookup Normalizer
// * Maps a highscores row onto a PlayerRecord by cell position.

use crate::config::constants::{LookupColumns, MISSING_STAT, UNKNOWN};
use crate::engine::fields::read_cell_or;
use crate::engine::record::PlayerRecord;

/// Builds the lookup record for `username` from the row cells.
/// Missing or blank cells become `?` (`Unknown` for the mode).
pub fn normalize_lookup(
    username: &str,
    cells: &[String],
    columns: &LookupColumns,
    source_url: &str,
) -> PlayerRecord {
    let stat = |index: usize| read_cell_or(cells, index, MISSING_STAT).to_string();

    PlayerRecord {
        mode: read_cell_or(cells, columns.mode, UNKNOWN).to_string(),
        total_kills: stat(columns.kills),
        total_deaths: stat(columns.deaths),
        kdr: stat(columns.kdr),
        streak: stat(columns.streak),
        elo: stat(columns.elo),
        source_url: Some(source_url.to_string()),
        ..PlayerRecord::placeholder(username.trim())
    }
}
