// * Outbound HTTP: the leaderboard API and the highscores search page

pub mod client;
pub mod errors;

pub use client::{HighscoresPage, StatsSource, TrackerClient};
pub use errors::NetworkError;
