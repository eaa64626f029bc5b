pub mod channel;

use std::sync::Arc;

use twilight_model::{
    channel::Message,
    id::{Id, marker::GuildMarker},
};

use crate::{
    commands::{Command, reply},
    context::Context,
    handle_command,
    services::permission::PermissionService,
};

use channel::{RemoveBanCheckChannelCommand, SetBanCheckChannelCommand};

pub const ADMIN_ONLY: &str = "❌ Only admins can use this command.";

/// Commands gated behind ADMINISTRATOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    SetBanCheckChannel,
    RemoveBanCheckChannel,
}

impl AdminAction {
    pub fn command(self) -> Command {
        match self {
            AdminAction::SetBanCheckChannel => Command::SetBanCheckChannel,
            AdminAction::RemoveBanCheckChannel => Command::RemoveBanCheckChannel,
        }
    }
}

pub struct AdminCommand;

impl AdminCommand {
    fn is_permitted(ctx: &Context, message: &Message, guild_id: Id<GuildMarker>) -> bool {
        let roles = message
            .member
            .as_ref()
            .map(|member| member.roles.as_slice())
            .unwrap_or_default();
        PermissionService::is_admin(&ctx.cache, guild_id, message.author.id, roles)
    }

    pub async fn handle(
        ctx: Arc<Context>,
        action: AdminAction,
        message: &Message,
        guild_id: Id<GuildMarker>,
        args: &[&str],
    ) {
        handle_command!("AdminCommand", {
            if !Self::is_permitted(&ctx, message, guild_id) {
                tracing::info!(
                    guild_id = guild_id.get(),
                    user_id = message.author.id.get(),
                    command = action.command().name(),
                    "admin command denied"
                );
                reply(&ctx, message.channel_id, ADMIN_ONLY).await?;
                return Ok(());
            }

            match action {
                AdminAction::SetBanCheckChannel => {
                    SetBanCheckChannelCommand::run(&ctx, message, guild_id, args.first().copied())
                        .await?
                }
                AdminAction::RemoveBanCheckChannel => {
                    RemoveBanCheckChannelCommand::run(&ctx, message, guild_id).await?
                }
            }
        });
    }
}
