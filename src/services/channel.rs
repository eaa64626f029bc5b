use twilight_model::id::{
    Id,
    marker::{ChannelMarker, GuildMarker},
};

use crate::{context::Context, dbs::StoreError};

pub struct ChannelService;

impl ChannelService {
    pub fn get_ban_check(ctx: &Context, guild_id: Id<GuildMarker>) -> Option<Id<ChannelMarker>> {
        ctx.store.get_channel(guild_id)
    }

    pub fn set_ban_check(
        ctx: &Context,
        guild_id: Id<GuildMarker>,
        channel_id: Id<ChannelMarker>,
    ) -> Result<(), StoreError> {
        ctx.store.set_channel(guild_id, channel_id)?;
        tracing::info!(guild_id = guild_id.get(), channel_id = channel_id.get(), "ban check channel set");
        Ok(())
    }

    pub fn remove_ban_check(ctx: &Context, guild_id: Id<GuildMarker>) -> Result<bool, StoreError> {
        let removed = ctx.store.remove_channel(guild_id)?;
        if removed {
            tracing::info!(guild_id = guild_id.get(), "ban check channel removed");
        }
        Ok(removed)
    }

    /// A channel we know nothing about is accepted; one cached under another guild is not.
    pub fn belongs_to_guild(
        ctx: &Context,
        guild_id: Id<GuildMarker>,
        channel_id: Id<ChannelMarker>,
    ) -> bool {
        ctx.cache
            .channel(channel_id)
            .and_then(|channel| channel.guild_id)
            .is_none_or(|owner| owner == guild_id)
    }
}
