use crate::config::constants::{CONNECT_TIMEOUT_SECS, LEADERBOARD_PATH, USER_AGENT};
use crate::config::settings::BotConfig;
use crate::engine::period::Period;
use crate::network::errors::NetworkError;
use crate::ops::telemetry::record_upstream;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use url::Url;

/// A fetched highscores search page.
#[derive(Debug, Clone, PartialEq)]
pub struct HighscoresPage {
    pub url: String,
    pub html: String,
}

/// Where the bot gets its data from.
/// `TrackerClient` talks HTTP; tests substitute an in-memory source.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_leaderboard(&self, period: Period) -> Result<Value, NetworkError>;

    async fn fetch_highscores(&self, username: &str) -> Result<HighscoresPage, NetworkError>;

    /// Host shown in leaderboard card footers.
    fn leaderboard_host(&self) -> String;

    /// Host shown in lookup card footers.
    fn highscores_host(&self) -> String;
}

// * HTTP client for the leaderboard API and the highscores page.
#[derive(Clone)]
pub struct TrackerClient {
    inner: Client,
    leaderboard_base: Url,
    lookup_url: Url,
}

impl TrackerClient {
    // * Every request is bounded by `timeout`; connects by CONNECT_TIMEOUT_SECS.
    pub fn new(mut leaderboard_base: Url, lookup_url: Url, timeout: Duration) -> Result<Self, NetworkError> {
        // * Url::join replaces the last segment unless the base path ends in '/'
        if !leaderboard_base.path().ends_with('/') {
            let path = format!("{}/", leaderboard_base.path());
            leaderboard_base.set_path(&path);
        }

        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()?;

        Ok(Self {
            inner,
            leaderboard_base,
            lookup_url,
        })
    }

    pub fn from_config(config: &BotConfig) -> Result<Self, NetworkError> {
        Self::new(
            config.leaderboard_base_url.clone(),
            config.lookup_url.clone(),
            config.request_timeout,
        )
    }

    // * {base}/api/leaderboard?period=24h|7d|30d, keeping any base path prefix
    pub fn leaderboard_url(&self, period: Period) -> Result<Url, NetworkError> {
        let mut url = self.leaderboard_base.join(LEADERBOARD_PATH)?;
        url.query_pairs_mut()
            .clear()
            .append_pair("period", period.query_value());
        Ok(url)
    }

    // * {lookup}?name=<username>&submit=Search
    pub fn highscores_url(&self, username: &str) -> Url {
        let mut url = self.lookup_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("name", username)
            .append_pair("submit", "Search");
        url
    }

    async fn get_text(&self, source: &'static str, url: &Url) -> Result<String, NetworkError> {
        let started = Instant::now();
        let result = self.send(url).await;
        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.outcome_label(),
        };
        record_upstream(source, outcome, started.elapsed().as_secs_f64());
        result
    }

    async fn send(&self, url: &Url) -> Result<String, NetworkError> {
        tracing::debug!(url = %url, "Fetching upstream");
        let resp = self.inner.get(url.clone()).send().await?;
        let status = resp.status();

        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Upstream returned non-success status");
            return Err(NetworkError::Status(status.as_u16()));
        }

        Ok(resp.text().await?)
    }
}

#[async_trait]
impl StatsSource for TrackerClient {
    async fn fetch_leaderboard(&self, period: Period) -> Result<Value, NetworkError> {
        let url = self.leaderboard_url(period)?;
        let body = self.get_text("leaderboard", &url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_highscores(&self, username: &str) -> Result<HighscoresPage, NetworkError> {
        let url = self.highscores_url(username);
        let html = self.get_text("lookup", &url).await?;
        Ok(HighscoresPage {
            url: url.to_string(),
            html,
        })
    }

    fn leaderboard_host(&self) -> String {
        host_of(&self.leaderboard_base)
    }

    fn highscores_host(&self) -> String {
        host_of(&self.lookup_url)
    }
}

fn host_of(url: &Url) -> String {
    url.host_str().unwrap_or(url.as_str()).to_string()
}
