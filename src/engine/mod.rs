// * Normalization core: tolerant field access, payload shapes and the two normalizers

pub mod fields;
pub mod html_rows;
pub mod leaderboard;
pub mod lookup;
pub mod payload;
pub mod period;
pub mod record;

pub use html_rows::find_player_row;
pub use leaderboard::normalize_leaderboard;
pub use lookup::normalize_lookup;
pub use payload::LeaderboardPayload;
pub use period::Period;
pub use record::PlayerRecord;
