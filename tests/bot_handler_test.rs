use async_trait::async_trait;
use pk_tracker_bot::bot::{Command, CommandHandler, CommandRouter, DiscordBot, Reply};
use pk_tracker_bot::engine::Period;
use pk_tracker_bot::network::{HighscoresPage, NetworkError, StatsSource};
use serde_json::{json, Value};
use std::sync::Mutex;

// * Test Suite for the Command Handler, driven by an in-memory StatsSource

enum Canned<T> {
    Ok(T),
    Status(u16),
}

struct FakeSource {
    leaderboard: Canned<Value>,
    highscores: Canned<String>,
    requested: Mutex<Vec<String>>,
}

impl FakeSource {
    fn new(leaderboard: Canned<Value>, highscores: Canned<String>) -> Self {
        Self {
            leaderboard,
            highscores,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl StatsSource for FakeSource {
    async fn fetch_leaderboard(&self, period: Period) -> Result<Value, NetworkError> {
        self.requested.lock().unwrap().push(period.query_value().to_string());
        match &self.leaderboard {
            Canned::Ok(v) => Ok(v.clone()),
            Canned::Status(code) => Err(NetworkError::Status(*code)),
        }
    }

    async fn fetch_highscores(&self, username: &str) -> Result<HighscoresPage, NetworkError> {
        self.requested.lock().unwrap().push(username.to_string());
        match &self.highscores {
            Canned::Ok(html) => Ok(HighscoresPage {
                url: format!("https://hs.example/?name={}", username),
                html: html.clone(),
            }),
            Canned::Status(code) => Err(NetworkError::Status(*code)),
        }
    }

    fn leaderboard_host(&self) -> String {
        "tracker.example".to_string()
    }

    fn highscores_host(&self) -> String {
        "hs.example".to_string()
    }
}

const PAGE: &str = "<table><tr><td>1</td><td>Jon Doe</td><td>PvP</td><td>120</td><td>40</td><td>3.00</td><td>7</td><td>1510</td></tr></table>";

fn expect_card(reply: Reply) -> pk_tracker_bot::bot::Card {
    match reply {
        Reply::Card(card) => card,
        Reply::Text(text) => panic!("expected a card, got text: {}", text),
    }
}

fn expect_text(reply: Reply) -> String {
    match reply {
        Reply::Text(text) => text,
        Reply::Card(card) => panic!("expected text, got card: {:?}", card.title),
    }
}

#[tokio::test]
async fn test_leaderboard_card() {
    let source = FakeSource::new(
        Canned::Ok(json!({ "entries": [
            { "username": "Ann", "killsGained": 5 },
            { "username": "Bo", "killsGained": 9 }
        ]})),
        Canned::Status(500),
    );
    let handler = CommandHandler::new(source);

    let card = expect_card(handler.handle(&Command::Leaderboard(Period::Weekly)).await);
    assert_eq!(card.title, "🏆 WEEKLY Leaderboard (Top 3)");
    assert_eq!(card.fields[0].name, "#1 Bo");
    assert_eq!(card.fields[1].name, "#2 Ann");
    assert_eq!(card.footer, "Source: tracker.example");
    assert_eq!(*handler.source().requested.lock().unwrap(), vec!["7d"]);
}

#[tokio::test]
async fn test_empty_leaderboard_still_renders_card() {
    let source = FakeSource::new(Canned::Ok(json!({ "entries": [] })), Canned::Status(500));
    let handler = CommandHandler::new(source);

    let card = expect_card(handler.handle(&Command::Leaderboard(Period::Daily)).await);
    assert_eq!(card.fields.len(), 1);
    assert_eq!(card.fields[0].name, "No data");
}

#[tokio::test]
async fn test_leaderboard_status_error_is_reported() {
    let source = FakeSource::new(Canned::Status(500), Canned::Status(500));
    let handler = CommandHandler::new(source);

    let text = expect_text(handler.handle(&Command::Leaderboard(Period::Monthly)).await);
    assert!(text.contains("500"), "{}", text);
    assert!(text.contains("monthly"));
}

#[tokio::test]
async fn test_lookup_card() {
    let source = FakeSource::new(Canned::Status(500), Canned::Ok(PAGE.to_string()));
    let handler = CommandHandler::new(source);

    let card = expect_card(handler.handle(&Command::Lookup("jon doe".to_string())).await);
    assert_eq!(card.title, "🔎 jon doe");
    assert_eq!(card.fields[0].value, "PvP");
    assert_eq!(card.fields[5].value, "1510");
    assert_eq!(card.url.as_deref(), Some("https://hs.example/?name=jon doe"));
}

#[tokio::test]
async fn test_lookup_not_found_is_not_an_error() {
    let source = FakeSource::new(Canned::Status(500), Canned::Ok(PAGE.to_string()));
    let handler = CommandHandler::new(source);

    let text = expect_text(handler.handle(&Command::Lookup("ghost".to_string())).await);
    assert!(text.contains("not found"), "{}", text);
    assert!(!text.contains("Failed"));
}

#[tokio::test]
async fn test_lookup_fetch_error() {
    let source = FakeSource::new(Canned::Status(500), Canned::Status(503));
    let handler = CommandHandler::new(source);

    let text = expect_text(handler.handle(&Command::Lookup("Jon".to_string())).await);
    assert!(text.starts_with("❌ Failed"));
    assert!(text.contains("503"));
}

#[tokio::test]
async fn test_bot_respond_pipeline() {
    let source = FakeSource::new(Canned::Status(500), Canned::Ok(PAGE.to_string()));
    let bot = DiscordBot::new(CommandRouter::default(), CommandHandler::new(source));

    assert_eq!(bot.respond("just chatting", false).await, None);
    assert_eq!(bot.respond("!lookup Jon Doe", true).await, None);

    let usage = bot.respond("!lookup", false).await;
    assert!(matches!(usage, Some(Reply::Text(t)) if t.contains("!lookup <username>")));

    let reply = bot.respond("!lookup Jon Doe", false).await.unwrap();
    assert_eq!(expect_card(reply).fields[1].value, "120");
}

#[tokio::test]
async fn test_long_name_reply_fits_in_one_message() {
    let name = "x".repeat(1990);

    let source = FakeSource::new(Canned::Status(500), Canned::Ok(PAGE.to_string()));
    let bot = DiscordBot::new(CommandRouter::default(), CommandHandler::new(source));
    let text = expect_text(bot.respond(&format!("!lookup {}", name), false).await.unwrap());
    assert!(text.contains("not found"), "{}", text);
    assert!(text.chars().count() <= 2000);

    let source = FakeSource::new(Canned::Status(500), Canned::Status(502));
    let bot = DiscordBot::new(CommandRouter::default(), CommandHandler::new(source));
    let text = expect_text(bot.respond(&format!("!lookup {}", name), false).await.unwrap());
    assert!(text.starts_with("❌ Failed"));
    assert!(text.chars().count() <= 2000);
}

#[tokio::test]
async fn test_long_matching_name_keeps_card_title_short() {
    let name = "y".repeat(600);
    let page = format!("<table><tr><td>1</td><td>{}</td><td>PvP</td></tr></table>", name);
    let source = FakeSource::new(Canned::Status(500), Canned::Ok(page));
    let handler = CommandHandler::new(source);

    let card = expect_card(handler.handle(&Command::Lookup(name)).await);
    assert!(card.title.chars().count() <= 256);
    assert!(card.title.ends_with('…'));
}

#[tokio::test]
async fn test_header_only_text_is_not_a_player() {
    let page = "<table><tr><th>#</th><th>Name</th><th>Kills</th></tr></table>";
    let source = FakeSource::new(Canned::Status(500), Canned::Ok(page.to_string()));
    let handler = CommandHandler::new(source);

    let text = expect_text(handler.handle(&Command::Lookup("kills".to_string())).await);
    assert!(text.contains("not found"), "{}", text);
}
