// * Chat surface: command routing, reply cards, the command handler and the Discord adapter

pub mod card;
pub mod discord;
pub mod handler;
pub mod router;

pub use card::{leaderboard_card, lookup_card, Card, CardField};
pub use discord::{run, DiscordBot, StartupError};
pub use handler::{CommandHandler, Reply};
pub use router::{Command, CommandRouter, Route, Usage};
