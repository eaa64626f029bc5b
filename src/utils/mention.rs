use twilight_model::id::{Id, marker::ChannelMarker};

/// Accepts `<#id>` or a bare snowflake.
pub fn parse_channel(arg: &str) -> Option<Id<ChannelMarker>> {
    let raw = arg
        .strip_prefix("<#")
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(arg);

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    raw.parse::<u64>().ok().and_then(Id::new_checked)
}

pub fn channel_mention(channel_id: Id<ChannelMarker>) -> String {
    format!("<#{channel_id}>")
}

#[cfg(test)]
#[path = "tests/mention.rs"]
mod tests;
