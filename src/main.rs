use pk_tracker_bot::bot;
use pk_tracker_bot::config::BotConfig;
use pk_tracker_bot::ops::telemetry;

#[tokio::main]
async fn main() {
    // * Load .env once, before reading LOG_FORMAT so it can live there too
    let dotenv = dotenvy::dotenv();

    // Initialize Telemetry
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("pretty")) {
        telemetry::init_tracing_pretty();
    } else {
        telemetry::init_tracing();
    }

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env"),
    }

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("pk-tracker-bot: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(config = ?config, "Starting pk-tracker-bot");

    if let Err(e) = bot::run(config).await {
        tracing::error!(error = %e, "Bot terminated");
        std::process::exit(1);
    }
}
