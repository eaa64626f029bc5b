pub mod admin;
pub mod check;

use once_cell::sync::Lazy;
use regex::Regex;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, UserMarker},
};

use crate::context::Context;

static MENTION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<@!?(\d+)>\s*").expect("failed to compile mention prefix regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetBanCheckChannel,
    RemoveBanCheckChannel,
    Check,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "setbancheckchannel" => Some(Command::SetBanCheckChannel),
            "removebancheckchannel" => Some(Command::RemoveBanCheckChannel),
            "check" => Some(Command::Check),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::SetBanCheckChannel => "setbancheckchannel",
            Command::RemoveBanCheckChannel => "removebancheckchannel",
            Command::Check => "check",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl Invocation<'_> {
    pub fn command(&self) -> Option<Command> {
        Command::from_name(self.name)
    }
}

/// Splits `content` into a command invocation when it starts with one of
/// `prefixes` or with a mention of the bot.
pub fn parse<'a>(
    content: &'a str,
    prefixes: &[String],
    bot_id: Option<Id<UserMarker>>,
) -> Option<Invocation<'a>> {
    let rest = strip_mention(content, bot_id).or_else(|| strip_prefix(content, prefixes))?;

    let mut parts = rest.split_whitespace();
    let name = parts.next()?;
    Some(Invocation { name, args: parts.collect() })
}

fn strip_mention(content: &str, bot_id: Option<Id<UserMarker>>) -> Option<&str> {
    let bot_id = bot_id?;
    let caps = MENTION_PREFIX.captures(content)?;
    if caps.get(1)?.as_str() != bot_id.get().to_string() {
        return None;
    }
    content.get(caps.get(0)?.end()..)
}

fn strip_prefix<'a>(content: &'a str, prefixes: &[String]) -> Option<&'a str> {
    prefixes
        .iter()
        .filter_map(|prefix| content.strip_prefix(prefix.as_str()))
        .find(|rest| !rest.is_empty() && !rest.starts_with(char::is_whitespace))
}

pub async fn reply(
    ctx: &Context,
    channel_id: Id<ChannelMarker>,
    content: &str,
) -> anyhow::Result<()> {
    ctx.http
        .create_message(channel_id)
        .content(content)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/parse.rs"]
mod tests;
