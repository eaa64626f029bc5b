use std::sync::Arc;

use twilight_model::gateway::payload::incoming::Ready;

use crate::{context::Context, services::health::HealthService};

pub async fn handle(ctx: Arc<Context>, event: Ready) {
    tracing::info!(
        user = %event.user.name,
        user_id = event.user.id.get(),
        guilds = event.guilds.len(),
        configured = ctx.store.len(),
        "bot is online"
    );

    HealthService::set_ready(true);
    HealthService::set_discord(true);
}
