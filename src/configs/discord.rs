use std::sync::LazyLock;

use crate::utils::env::{parse_env, parse_env_list};

pub struct DiscordConfigs {
    pub discord_token: String,
    pub command_prefixes: Vec<String>,
}

pub static DISCORD_CONFIGS: LazyLock<DiscordConfigs> = LazyLock::new(|| DiscordConfigs {
    discord_token: parse_env("DISCORD_TOKEN", ""),
    command_prefixes: parse_env_list("COMMAND_PREFIXES", "!,/"),
});
