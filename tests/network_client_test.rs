use pk_tracker_bot::config::settings::{BotConfig, ENV_DISCORD_TOKEN, ENV_LEADERBOARD_BASE_URL};
use pk_tracker_bot::engine::Period;
use pk_tracker_bot::network::{NetworkError, StatsSource, TrackerClient};
use std::time::Duration;
use url::Url;

// * Test Suite for request construction (no live network)

fn client() -> TrackerClient {
    TrackerClient::new(
        Url::parse("https://tracker.example").unwrap(),
        Url::parse("https://spawnpk.net/highscores/index.php").unwrap(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_client_initialization() {
    let client = TrackerClient::new(
        Url::parse("https://tracker.example").unwrap(),
        Url::parse("https://hs.example").unwrap(),
        Duration::from_secs(1),
    );
    assert!(client.is_ok());
}

#[test]
fn test_leaderboard_urls() {
    let client = client();
    assert_eq!(
        client.leaderboard_url(Period::Daily).unwrap().as_str(),
        "https://tracker.example/api/leaderboard?period=24h"
    );
    assert_eq!(
        client.leaderboard_url(Period::Weekly).unwrap().as_str(),
        "https://tracker.example/api/leaderboard?period=7d"
    );
    assert_eq!(
        client.leaderboard_url(Period::Monthly).unwrap().as_str(),
        "https://tracker.example/api/leaderboard?period=30d"
    );
}

#[test]
fn test_leaderboard_url_keeps_base_path() {
    for base in ["https://host.example/tracker", "https://host.example/tracker/"] {
        let client = TrackerClient::new(
            Url::parse(base).unwrap(),
            Url::parse("https://hs.example").unwrap(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.leaderboard_url(Period::Daily).unwrap().as_str(),
            "https://host.example/tracker/api/leaderboard?period=24h"
        );
    }
}

#[test]
fn test_highscores_url_encodes_name() {
    let url = client().highscores_url("Jon Doe&x=1");
    assert_eq!(
        url.as_str(),
        "https://spawnpk.net/highscores/index.php?name=Jon+Doe%26x%3D1&submit=Search"
    );
}

#[test]
fn test_hosts() {
    let client = client();
    assert_eq!(client.leaderboard_host(), "tracker.example");
    assert_eq!(client.highscores_host(), "spawnpk.net");
}

#[test]
fn test_from_config() {
    let config = BotConfig::from_lookup(|key| match key {
        k if k == ENV_DISCORD_TOKEN => Some("token".to_string()),
        k if k == ENV_LEADERBOARD_BASE_URL => Some("http://localhost:3000".to_string()),
        _ => None,
    })
    .unwrap();

    let client = TrackerClient::from_config(&config).unwrap();
    assert_eq!(
        client.leaderboard_url(Period::Daily).unwrap().as_str(),
        "http://localhost:3000/api/leaderboard?period=24h"
    );
}

#[test]
fn test_user_reason() {
    assert_eq!(NetworkError::Status(404).user_reason(), "HTTP 404");
    let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_eq!(NetworkError::from(decode).user_reason(), "unreadable response");
}
