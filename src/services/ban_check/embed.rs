use twilight_model::channel::message::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder, ImageSource};

use crate::configs::ban_check::{BANNED_IMAGE, CLEAN_IMAGE, DEVELOPER_CREDIT};

use super::{BanCheckResult, BanCheckService, NO_DATA, models::BAN_REASON};

pub const COLOR_BANNED: u32 = 0xE74C3C;
pub const COLOR_CLEAN: u32 = 0x2ECC71;

/// Longest value shown per row; seven clipped rows stay under the 4096 character description cap.
const MAX_VALUE_CHARS: usize = 512;

fn clip(value: &str) -> String {
    match value.char_indices().nth(MAX_VALUE_CHARS) {
        Some((end, _)) => format!("{}…", &value[..end]),
        None => value.to_string(),
    }
}

fn box_list(header: &str, rows: &[(&str, &str)]) -> String {
    let mut out = format!("**┌ {header}**");
    for (i, (label, value)) in rows.iter().enumerate() {
        let branch = if i + 1 == rows.len() { "└─" } else { "├─" };
        out.push_str(&format!("\n**{branch} {label}**: {value}"));
    }
    out
}

impl BanCheckService {
    pub fn description(result: &BanCheckResult) -> String {
        let nickname = clip(&result.nickname);
        let player_uid = format!("`{}`", clip(&result.player_uid));
        let last_login = clip(&result.last_login);
        let region = clip(&result.region);

        if result.is_banned {
            let suspension = clip(result.suspension.as_deref().unwrap_or(NO_DATA));
            box_list(
                "ACCOUNT BAN INFO",
                &[
                    ("Status", "Banned"),
                    ("Reason", BAN_REASON),
                    ("Suspension Duration", suspension.as_str()),
                    ("Nickname", nickname.as_str()),
                    ("Player UID", player_uid.as_str()),
                    ("Last Login", last_login.as_str()),
                    ("Region", region.as_str()),
                ],
            )
        } else {
            box_list(
                "ACCOUNT BASIC INFO",
                &[
                    ("Status", "Clean"),
                    ("Nickname", nickname.as_str()),
                    ("Player UID", player_uid.as_str()),
                    ("Last Login", last_login.as_str()),
                    ("Region", region.as_str()),
                ],
            )
        }
    }

    /// `clock` is the already formatted local time shown in the footer.
    pub fn result_embed(
        result: &BanCheckResult,
        avatar_url: &str,
        clock: &str,
    ) -> anyhow::Result<Embed> {
        let (color, title, image) = if result.is_banned {
            (COLOR_BANNED, "🚫 BANNED ACCOUNT", BANNED_IMAGE)
        } else {
            (COLOR_CLEAN, "✅ CLEAN ACCOUNT", CLEAN_IMAGE)
        };

        let footer = EmbedFooterBuilder::new(format!("{DEVELOPER_CREDIT} | Today at {clock}")).build();

        let embed = EmbedBuilder::new()
            .color(color)
            .title(title)
            .description(Self::description(result))
            .image(ImageSource::url(image)?)
            .thumbnail(ImageSource::url(avatar_url)?)
            .footer(footer)
            .validate()?
            .build();
        Ok(embed)
    }
}

#[cfg(test)]
#[path = "tests/embed.rs"]
mod tests;
