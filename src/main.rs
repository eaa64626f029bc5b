use std::sync::Arc;

use bancheck_bot::{
    bot::Bot,
    configs::{app::APP_CONFIG, discord::DISCORD_CONFIGS},
    context::ContextBuilder,
    services::health::HealthService,
};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use twilight_gateway::{Intents, Shard, ShardId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }

    let token = DISCORD_CONFIGS.discord_token.clone();
    if token.is_empty() {
        tracing::error!("DISCORD_TOKEN is not set in environment variables");
        anyhow::bail!("missing DISCORD_TOKEN");
    }

    let ctx = Arc::new(ContextBuilder::new().build()?);

    let shard = Shard::new(
        ShardId::ONE,
        token,
        Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT,
    );

    let shutdown_token = CancellationToken::new();

    let health_shutdown = shutdown_token.clone();
    HealthService::spawn(APP_CONFIG.health_addr.clone(), async move {
        health_shutdown.cancelled().await;
    });

    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("shutdown requested"),
            Err(e) => tracing::error!(error = %e, "failed to listen for ctrl-c"),
        }
        signal_token.cancel();
    });

    Bot::new(ctx, shard).run(shutdown_token).await
}
