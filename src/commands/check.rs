use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use twilight_model::{
    channel::Message,
    id::{Id, marker::GuildMarker},
};

use crate::{
    commands::reply,
    context::Context,
    handle_command,
    services::{
        ban_check::{BanCheckService, CheckError},
        channel::ChannelService,
    },
    utils::{avatar::avatar_url, mention::channel_mention, time},
};

pub const CHECKING: &str = "🔍 Checking ban status...";

pub struct CheckCommand;

fn is_uid(arg: &str) -> bool {
    !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit())
}

impl CheckCommand {
    pub async fn handle(
        ctx: Arc<Context>,
        message: &Message,
        guild_id: Id<GuildMarker>,
        uid: Option<&str>,
    ) {
        handle_command!("CheckCommand", {
            Self::run(&ctx, message, guild_id, uid).await?;
        });
    }

    async fn run(
        ctx: &Context,
        message: &Message,
        guild_id: Id<GuildMarker>,
        uid: Option<&str>,
    ) -> anyhow::Result<()> {
        let prefix = ctx.settings.primary_prefix();

        let Some(allowed) = ChannelService::get_ban_check(ctx, guild_id) else {
            metrics::counter!("ban_checks_total", "result" => "not_configured").increment(1);
            let content = format!(
                "⚠️ Please set a ban check channel first using `{prefix}setbancheckchannel #channel`"
            );
            return reply(ctx, message.channel_id, &content).await;
        };

        if message.channel_id != allowed {
            metrics::counter!("ban_checks_total", "result" => "wrong_channel").increment(1);
            let content = format!(
                "❌ You can’t use this command here. Please use it in {}.",
                channel_mention(allowed)
            );
            return reply(ctx, message.channel_id, &content).await;
        }

        let Some(uid) = uid.filter(|uid| is_uid(uid)) else {
            metrics::counter!("ban_checks_total", "result" => "bad_argument").increment(1);
            return reply(ctx, message.channel_id, &format!("❌ Use: {prefix}check <uid>")).await;
        };

        let placeholder = ctx
            .http
            .create_message(message.channel_id)
            .content(CHECKING)
            .await?
            .model()
            .await?;

        let started = Instant::now();
        let outcome = BanCheckService::check(&ctx.reqwest, &ctx.settings.api_url, uid).await;
        metrics::histogram!("ban_check_request_seconds").record(started.elapsed().as_secs_f64());

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, uid, guild_id = guild_id.get(), "ban check failed");
                metrics::counter!("ban_checks_total", "result" => e.label()).increment(1);
                ctx.http
                    .update_message(message.channel_id, placeholder.id)
                    .content(Some(e.user_message().as_str()))
                    .await?;
                return Ok(());
            }
        };

        let status = if result.is_banned { "banned" } else { "clean" };
        metrics::counter!("ban_checks_total", "result" => status).increment(1);
        tracing::info!(uid, status, guild_id = guild_id.get(), "ban check completed");

        let embed = match BanCheckService::result_embed(
            &result,
            &avatar_url(&message.author),
            &time::format_clock(Utc::now()),
        ) {
            Ok(embed) => embed,
            Err(e) => {
                tracing::warn!(error = %e, uid, guild_id = guild_id.get(), "ban check embed rejected");
                ctx.http
                    .update_message(message.channel_id, placeholder.id)
                    .content(Some(CheckError::Malformed.user_message().as_str()))
                    .await?;
                return Ok(());
            }
        };
        ctx.http
            .update_message(message.channel_id, placeholder.id)
            .content(None)
            .embeds(Some(&[embed]))
            .await?;

        Ok(())
    }
}
