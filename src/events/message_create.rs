use std::sync::Arc;

use twilight_model::channel::{Message, message::MessageType};

use crate::{
    commands::{
        self, Command,
        admin::{AdminAction, AdminCommand},
        check::CheckCommand,
    },
    context::Context,
};

pub async fn handle(ctx: Arc<Context>, message: Message) {
    if message.author.bot
        || message.author.system.unwrap_or(false)
        || (message.kind != MessageType::Regular && message.kind != MessageType::Reply)
    {
        return;
    }

    let Some(guild_id) = message.guild_id else {
        return;
    };

    let bot_id = ctx.cache.current_user().map(|user| user.id);
    let Some(invocation) = commands::parse(&message.content, &ctx.settings.prefixes, bot_id) else {
        return;
    };
    let Some(command) = invocation.command() else {
        return;
    };

    tracing::debug!(
        guild_id = guild_id.get(),
        channel_id = message.channel_id.get(),
        command = command.name(),
        "dispatching command"
    );

    match command {
        Command::Check => {
            let uid = invocation.args.first().copied();
            CheckCommand::handle(ctx.clone(), &message, guild_id, uid).await
        }
        Command::SetBanCheckChannel => {
            let action = AdminAction::SetBanCheckChannel;
            AdminCommand::handle(ctx.clone(), action, &message, guild_id, &invocation.args).await
        }
        Command::RemoveBanCheckChannel => {
            let action = AdminAction::RemoveBanCheckChannel;
            AdminCommand::handle(ctx.clone(), action, &message, guild_id, &invocation.args).await
        }
    }
}
