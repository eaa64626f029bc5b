#![cfg(feature = "test-utils")]

use serde_json::json;
use twilight_cache_inmemory::DefaultInMemoryCache;
use twilight_model::{
    channel::Channel,
    gateway::payload::incoming::{ChannelCreate, GuildCreate},
    guild::{
        AfkTimeout, DefaultMessageNotificationLevel, ExplicitContentFilter, Guild, MfaLevel,
        NSFWLevel, PremiumTier, Role, SystemChannelFlags, VerificationLevel,
    },
    id::{Id, marker::GuildMarker},
};

pub const OWNER_ID: u64 = 1;

pub fn make_role(id: u64, name: &str, permissions: u64) -> Role {
    serde_json::from_value(json!({
        "id": id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "managed": false,
        "mentionable": false,
        "permissions": permissions.to_string(),
        "position": 1,
        "flags": 0
    }))
    .unwrap()
}

pub fn make_channel(id: u64, guild_id: u64) -> Channel {
    serde_json::from_value(json!({
        "id": id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": "general",
        "type": 0
    }))
    .unwrap()
}

pub fn make_guild(id: Id<GuildMarker>, name: &str, roles: Vec<Role>) -> Guild {
    Guild {
        afk_channel_id: None,
        afk_timeout: AfkTimeout::FIVE_MINUTES,
        application_id: None,
        approximate_member_count: None,
        approximate_presence_count: None,
        banner: None,
        channels: Vec::new(),
        default_message_notifications: DefaultMessageNotificationLevel::Mentions,
        description: None,
        discovery_splash: None,
        emojis: Vec::new(),
        explicit_content_filter: ExplicitContentFilter::None,
        features: Vec::new(),
        guild_scheduled_events: Vec::new(),
        icon: None,
        id,
        joined_at: None,
        large: false,
        max_members: None,
        max_presences: None,
        max_stage_video_channel_users: None,
        max_video_channel_users: None,
        member_count: None,
        members: Vec::new(),
        mfa_level: MfaLevel::None,
        name: name.to_owned(),
        nsfw_level: NSFWLevel::Default,
        owner_id: Id::new(OWNER_ID),
        owner: None,
        permissions: None,
        preferred_locale: "en_us".to_owned(),
        premium_progress_bar_enabled: false,
        premium_subscription_count: None,
        premium_tier: PremiumTier::None,
        presences: Vec::new(),
        public_updates_channel_id: None,
        roles,
        rules_channel_id: None,
        safety_alerts_channel_id: None,
        splash: None,
        stage_instances: Vec::new(),
        stickers: Vec::new(),
        system_channel_flags: SystemChannelFlags::empty(),
        system_channel_id: None,
        threads: Vec::new(),
        unavailable: Some(false),
        vanity_url_code: None,
        verification_level: VerificationLevel::None,
        voice_states: Vec::new(),
        widget_channel_id: None,
        widget_enabled: None,
    }
}

pub fn cache_guild(cache: &DefaultInMemoryCache, guild: Guild) {
    cache.update(&GuildCreate::Available(guild));
}

pub fn cache_channel(cache: &DefaultInMemoryCache, channel: Channel) {
    cache.update(&ChannelCreate(channel));
}
