use std::sync::LazyLock;

use crate::utils::env::parse_env;

pub struct BanCheckConfigs {
    pub api_url: String,
    pub timeout_secs: u64,
    pub config_file: String,
}

pub static BAN_CHECK_CONFIGS: LazyLock<BanCheckConfigs> = LazyLock::new(|| BanCheckConfigs {
    api_url: parse_env("BAN_CHECK_API_URL", "http://raw.thug4ff.com"),
    timeout_secs: parse_env("BAN_CHECK_TIMEOUT_SECS", "10"),
    config_file: parse_env("BAN_CHECK_CONFIG_FILE", "config.json"),
});

pub const DEVELOPER_CREDIT: &str = "DEVELOPED BY M8N TEAM";
pub const BANNED_IMAGE: &str = "https://i.ibb.co/wFxTy8TZ/banned.gif";
pub const CLEAN_IMAGE: &str = "https://i.ibb.co/Kx1RYVKZ/notbanned.gif";
