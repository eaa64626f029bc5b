use twilight_model::{
    channel::Message,
    id::{Id, marker::GuildMarker},
};

use crate::{
    commands::reply,
    context::Context,
    services::channel::ChannelService,
    utils::mention::{channel_mention, parse_channel},
};

pub const SAVE_FAILED: &str = "❌ Failed to save configuration.";

pub struct SetBanCheckChannelCommand;

impl SetBanCheckChannelCommand {
    pub async fn run(
        ctx: &Context,
        message: &Message,
        guild_id: Id<GuildMarker>,
        arg: Option<&str>,
    ) -> anyhow::Result<()> {
        let channel_id = arg
            .and_then(parse_channel)
            .filter(|channel_id| ChannelService::belongs_to_guild(ctx, guild_id, *channel_id));

        let Some(channel_id) = channel_id else {
            let usage = format!(
                "❌ Use: {}setbancheckchannel #channel",
                ctx.settings.primary_prefix()
            );
            return reply(ctx, message.channel_id, &usage).await;
        };

        if let Err(e) = ChannelService::set_ban_check(ctx, guild_id, channel_id) {
            tracing::error!(error = %e, guild_id = guild_id.get(), "failed to persist ban check channel");
            return reply(ctx, message.channel_id, SAVE_FAILED).await;
        }

        let content = format!(
            "✅ Ban check channel has been set to {}",
            channel_mention(channel_id)
        );
        reply(ctx, message.channel_id, &content).await
    }
}

pub struct RemoveBanCheckChannelCommand;

impl RemoveBanCheckChannelCommand {
    pub async fn run(
        ctx: &Context,
        message: &Message,
        guild_id: Id<GuildMarker>,
    ) -> anyhow::Result<()> {
        let content = match ChannelService::remove_ban_check(ctx, guild_id) {
            Ok(true) => "✅ Ban check channel has been removed.",
            Ok(false) => "⚠️ No ban check channel was set.",
            Err(e) => {
                tracing::error!(error = %e, guild_id = guild_id.get(), "failed to persist ban check channel removal");
                SAVE_FAILED
            }
        };
        reply(ctx, message.channel_id, content).await
    }
}
