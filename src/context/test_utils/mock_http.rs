use std::future::IntoFuture;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use twilight_model::channel::message::{Embed, Message, MessageFlags, MessageType};
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker},
};
use twilight_model::user::User;
use twilight_model::util::Timestamp;

/// Records every message the bot would have sent or edited.
#[derive(Debug, Clone)]
pub struct MessageRecord {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    pub kind: MessageOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOp {
    Create,
    Update,
}

pub struct MockResponse<T> {
    data: T,
}

impl<T> MockResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub async fn model(self) -> anyhow::Result<T> {
        Ok(self.data)
    }
}

pub struct MockCreateMessage<'a> {
    client: &'a MockClient,
    channel_id: Id<ChannelMarker>,
    content: Option<String>,
    embeds: Vec<Embed>,
}

impl<'a> MockCreateMessage<'a> {
    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn embeds(mut self, embeds: &'a [Embed]) -> Self {
        self.embeds = embeds.to_vec();
        self
    }

    async fn exec(self) -> anyhow::Result<MockResponse<Message>> {
        let id = Id::new(self.client.next_id.fetch_add(1, Ordering::SeqCst));
        let message = fake_message(
            id,
            self.channel_id,
            self.content.clone().unwrap_or_default(),
            self.embeds.clone(),
        );
        self.client.record(MessageRecord {
            channel_id: self.channel_id,
            message_id: id,
            content: self.content,
            embeds: self.embeds,
            kind: MessageOp::Create,
        });
        Ok(MockResponse::new(message))
    }
}

impl<'a> IntoFuture for MockCreateMessage<'a> {
    type Output = anyhow::Result<MockResponse<Message>>;
    type IntoFuture = Pin<Box<dyn std::future::Future<Output = Self::Output> + Send + 'a>>;
    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exec())
    }
}

pub struct MockUpdateMessage<'a> {
    client: &'a MockClient,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    content: Option<Option<String>>,
    embeds: Option<Vec<Embed>>,
}

impl<'a> MockUpdateMessage<'a> {
    pub fn content(mut self, content: Option<&'a str>) -> Self {
        self.content = Some(content.map(str::to_string));
        self
    }

    pub fn embeds(mut self, embeds: Option<&'a [Embed]>) -> Self {
        self.embeds = Some(embeds.map(<[Embed]>::to_vec).unwrap_or_default());
        self
    }

    async fn exec(self) -> anyhow::Result<MockResponse<Message>> {
        let content = self.content.unwrap_or(None);
        let embeds = self.embeds.unwrap_or_default();
        let message = fake_message(
            self.message_id,
            self.channel_id,
            content.clone().unwrap_or_default(),
            embeds.clone(),
        );
        self.client.record(MessageRecord {
            channel_id: self.channel_id,
            message_id: self.message_id,
            content,
            embeds,
            kind: MessageOp::Update,
        });
        Ok(MockResponse::new(message))
    }
}

impl<'a> IntoFuture for MockUpdateMessage<'a> {
    type Output = anyhow::Result<MockResponse<Message>>;
    type IntoFuture = Pin<Box<dyn std::future::Future<Output = Self::Output> + Send + 'a>>;
    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exec())
    }
}

pub struct MockClient {
    pub messages: Mutex<Vec<MessageRecord>>,
    next_id: AtomicU64,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    pub fn new() -> Self {
        Self { messages: Mutex::new(Vec::new()), next_id: AtomicU64::new(1_000) }
    }

    fn record(&self, record: MessageRecord) {
        self.messages.lock().unwrap().push(record);
    }

    pub fn records(&self) -> Vec<MessageRecord> {
        self.messages.lock().unwrap().clone()
    }

    pub fn last_message(&self) -> Option<MessageRecord> {
        self.messages.lock().unwrap().last().cloned()
    }

    pub fn create_message(&self, channel_id: Id<ChannelMarker>) -> MockCreateMessage<'_> {
        MockCreateMessage { client: self, channel_id, content: None, embeds: Vec::new() }
    }

    pub fn update_message(
        &self,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
    ) -> MockUpdateMessage<'_> {
        MockUpdateMessage { client: self, channel_id, message_id, content: None, embeds: None }
    }
}

fn fake_user() -> User {
    User {
        accent_color: None,
        avatar: None,
        avatar_decoration: None,
        avatar_decoration_data: None,
        banner: None,
        bot: true,
        discriminator: 0,
        email: None,
        flags: None,
        global_name: None,
        id: Id::new(1),
        locale: None,
        mfa_enabled: None,
        name: "bancheck".to_owned(),
        premium_type: None,
        public_flags: None,
        system: None,
        verified: None,
    }
}

fn fake_message(
    id: Id<MessageMarker>,
    channel_id: Id<ChannelMarker>,
    content: String,
    embeds: Vec<Embed>,
) -> Message {
    Message {
        activity: None,
        application: None,
        application_id: None,
        attachments: Vec::new(),
        author: fake_user(),
        call: None,
        channel_id,
        components: Vec::new(),
        content,
        edited_timestamp: None,
        embeds,
        flags: Some(MessageFlags::empty()),
        guild_id: None,
        id,
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
