// * Configuration: compile-time defaults and environment-driven settings

pub mod constants;
pub mod settings;

pub use constants::{FieldKeys, LookupColumns, HIGHSCORES_COLUMNS, LEADERBOARD_FIELD_KEYS};
pub use settings::{BotConfig, ConfigError};
