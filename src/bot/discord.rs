// * Discord transport adapter
// * Feeds gateway messages through the router and handler, then replies.

use async_trait::async_trait;
use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::{Context, EventHandler, GatewayIntents};
use serenity::Client;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::bot::handler::{CommandHandler, Reply};
use crate::bot::router::{CommandRouter, Route};
use crate::config::settings::BotConfig;
use crate::network::client::{StatsSource, TrackerClient};
use crate::network::errors::NetworkError;
use crate::ops::telemetry::start_metrics_server;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] NetworkError),

    #[error("Discord client error: {0}")]
    Gateway(#[from] serenity::Error),
}

pub struct DiscordBot<S> {
    router: CommandRouter,
    handler: CommandHandler<S>,
}

impl<S: StatsSource> DiscordBot<S> {
    pub fn new(router: CommandRouter, handler: CommandHandler<S>) -> Self {
        Self { router, handler }
    }

    /// Routes and handles message text; `None` means no reply is due.
    pub async fn respond(&self, content: &str, author_is_bot: bool) -> Option<Reply> {
        match self.router.route(content, author_is_bot) {
            Route::Ignore => None,
            Route::Usage(usage) => Some(Reply::Text(usage.text(self.router.prefix()))),
            Route::Run(command) => {
                debug!(command = command.kind(), "Dispatching command");
                Some(self.handler.handle(&command).await)
            }
        }
    }
}

#[async_trait]
impl<S: StatsSource + 'static> EventHandler for DiscordBot<S> {
    async fn message(&self, ctx: Context, msg: Message) {
        let Some(reply) = self.respond(&msg.content, msg.author.bot).await else {
            return;
        };

        let builder = match reply {
            Reply::Card(card) => CreateMessage::new().embed(card.to_create_embed()),
            Reply::Text(text) => CreateMessage::new().content(text),
        }
        .reference_message(&msg);

        if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
            warn!(channel = %msg.channel_id, error = %e, "Failed to send reply");
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, guilds = ready.guilds.len(), "Connected to Discord");
    }
}

pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES | GatewayIntents::DIRECT_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Builds every collaborator from `config` and runs the gateway until shutdown.
pub async fn run(config: BotConfig) -> Result<(), StartupError> {
    let metrics = match config.metrics_port {
        Some(port) => Some(start_metrics_server(port).await),
        None => None,
    };

    let source = TrackerClient::from_config(&config)?;
    let bot = DiscordBot::new(
        CommandRouter::new(config.command_prefix.clone()),
        CommandHandler::new(source),
    );

    let mut client = Client::builder(&config.discord_token, intents())
        .event_handler(bot)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            shard_manager.shutdown_all().await;
        }
    });

    let result = client.start().await;

    if let Some(handle) = metrics {
        handle.shutdown();
    }

    if let Err(e) = &result {
        error!(error = %e, "Discord client stopped with error");
    }
    Ok(result?)
}
