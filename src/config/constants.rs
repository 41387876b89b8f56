// * Configuration Constants
// * Central location for all upstream endpoints, timeouts and layout tables

// * Player tracker site serving the JSON leaderboard API
pub const DEFAULT_LEADERBOARD_BASE_URL: &str = "https://v0-player-tracker-website.vercel.app";

// * Path appended to the leaderboard base URL (relative, so a base path prefix is kept)
pub const LEADERBOARD_PATH: &str = "api/leaderboard";

// * Third-party highscores search page (HTML)
pub const DEFAULT_LOOKUP_URL: &str = "https://spawnpk.net/highscores/index.php";

// * Outbound request timeout in seconds (whole request)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// * Outbound connect timeout in seconds
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

// * Messages must start with this to be considered a command
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

// * Number of leaderboard entries shown per card
pub const LEADERBOARD_TOP_N: usize = 3;

// * User-Agent sent on every outbound request
pub const USER_AGENT: &str = concat!("pk-tracker-bot/", env!("CARGO_PKG_VERSION"));

// * Sentinel for a missing username or game mode
pub const UNKNOWN: &str = "Unknown";

// * Sentinel for a missing numeric stat
pub const MISSING_STAT: &str = "?";

// * Longest player name echoed back in a reply; longer names are cut and end in `…`
// ! Discord caps message content at 2000 chars and embed titles/field names at 256
pub const MAX_ECHOED_NAME_CHARS: usize = 100;

// * Embed accent colours
pub const LEADERBOARD_COLOUR: u32 = 0xF1_C4_0F;
pub const LOOKUP_COLOUR: u32 = 0x34_98_DB;

// * Keys under which the leaderboard API has been seen to wrap its entry list.
// ! Order is priority: the first key holding an array wins.
pub const LEADERBOARD_WRAPPER_KEYS: &[&str] =
    &["entries", "players", "leaderboard", "data", "results", "rows"];

/// Candidate JSON keys per normalized field, in priority order.
#[derive(Debug, Clone, Copy)]
pub struct FieldKeys {
    pub username: &'static [&'static str],
    pub period_delta: &'static [&'static str],
    pub total_kills: &'static [&'static str],
    pub total_deaths: &'static [&'static str],
    pub kdr: &'static [&'static str],
    pub streak: &'static [&'static str],
    pub elo: &'static [&'static str],
    pub mode: &'static [&'static str],
}

// * Field names observed across leaderboard API versions
pub const LEADERBOARD_FIELD_KEYS: FieldKeys = FieldKeys {
    username: &["username", "name", "player", "playerName", "player_name"],
    period_delta: &[
        "killsGained",
        "killsChange",
        "kills_gained",
        "killsDelta",
        "kills_delta",
        "delta",
        "gained",
    ],
    total_kills: &["kills", "totalKills", "total_kills"],
    total_deaths: &["deaths", "totalDeaths", "total_deaths"],
    kdr: &["kdr", "kd", "kdRatio", "kd_ratio"],
    streak: &["streak", "killstreak", "currentStreak"],
    elo: &["elo", "rating"],
    mode: &["mode", "gameMode", "game_mode"],
};

/// Cell positions of each stat within a highscores table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupColumns {
    pub mode: usize,
    pub kills: usize,
    pub deaths: usize,
    pub kdr: usize,
    pub streak: usize,
    pub elo: usize,
}

// * Column order of the highscores table: rank, name, mode, kills, deaths, kdr, streak, elo
// ! Update here if the upstream markup changes; extraction logic reads only this table.
pub const HIGHSCORES_COLUMNS: LookupColumns = LookupColumns {
    mode: 2,
    kills: 3,
    deaths: 4,
    kdr: 5,
    streak: 6,
    elo: 7,
};
