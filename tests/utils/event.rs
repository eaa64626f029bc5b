use twilight_model::gateway::payload::incoming::Ready;
use twilight_model::{
    channel::Message,
    channel::message::{MessageFlags, MessageType},
    guild::{MemberFlags, PartialMember, UnavailableGuild},
    id::{
        Id,
        marker::{ApplicationMarker, RoleMarker},
    },
    oauth::PartialApplication,
    user::{CurrentUser, User},
    util::datetime::Timestamp,
};

pub const BOT_ID: u64 = 999;

fn make_user(user_id: u64, bot: bool) -> User {
    User {
        accent_color: None,
        avatar: None,
        avatar_decoration: None,
        avatar_decoration_data: None,
        banner: None,
        bot,
        discriminator: 0,
        email: None,
        flags: None,
        global_name: None,
        id: Id::new(user_id),
        locale: None,
        mfa_enabled: None,
        name: "tester".to_owned(),
        premium_type: None,
        public_flags: None,
        system: None,
        verified: None,
    }
}

pub fn make_message(
    id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    user_id: u64,
    content: &str,
) -> Message {
    Message {
        activity: None,
        application: None,
        application_id: None,
        attachments: Vec::new(),
        author: make_user(user_id, false),
        call: None,
        channel_id: Id::new(channel_id),
        components: Vec::new(),
        content: content.to_owned(),
        edited_timestamp: None,
        embeds: Vec::new(),
        flags: Some(MessageFlags::empty()),
        guild_id: guild_id.map(Id::new),
        id: Id::new(id),
        #[allow(deprecated)]
        interaction: None,
        interaction_metadata: None,
        kind: MessageType::Regular,
        member: None,
        mention_channels: Vec::new(),
        mention_everyone: false,
        mention_roles: Vec::new(),
        mentions: Vec::new(),
        message_snapshots: Vec::new(),
        pinned: false,
        poll: None,
        reactions: Vec::new(),
        reference: None,
        referenced_message: None,
        role_subscription_data: None,
        sticker_items: Vec::new(),
        timestamp: Timestamp::from_secs(1).unwrap(),
        thread: None,
        tts: false,
        webhook_id: None,
    }
}

pub fn bot_message(id: u64, channel_id: u64, guild_id: u64, content: &str) -> Message {
    let mut message = make_message(id, channel_id, Some(guild_id), BOT_ID + 1, content);
    message.author = make_user(BOT_ID + 1, true);
    message
}

/// Attaches guild member data carrying `roles`, as the gateway does for guild messages.
pub fn with_roles(mut message: Message, roles: &[u64]) -> Message {
    message.member = Some(PartialMember {
        avatar: None,
        communication_disabled_until: None,
        deaf: false,
        flags: MemberFlags::empty(),
        joined_at: None,
        mute: false,
        nick: None,
        permissions: None,
        premium_since: None,
        roles: roles
            .iter()
            .map(|id| Id::<RoleMarker>::new(*id))
            .collect(),
        user: None,
    });
    message
}

pub fn ready_event(user_id: u64, guild_ids: &[u64]) -> Ready {
    Ready {
        application: PartialApplication {
            flags: twilight_model::oauth::ApplicationFlags::empty(),
            id: Id::<ApplicationMarker>::new(1),
        },
        guilds: guild_ids
            .iter()
            .map(|id| UnavailableGuild { id: Id::new(*id), unavailable: true })
            .collect(),
        resume_gateway_url: String::new(),
        session_id: String::new(),
        shard: None,
        user: CurrentUser {
            accent_color: None,
            avatar: None,
            banner: None,
            bot: true,
            discriminator: 0,
            email: None,
            flags: None,
            id: Id::new(user_id),
            locale: None,
            mfa_enabled: false,
            name: "bancheck".to_owned(),
            premium_type: None,
            public_flags: None,
            verified: None,
        },
        version: 0,
    }
}
