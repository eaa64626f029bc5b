use std::sync::LazyLock;

use crate::utils::env::parse_env;

pub struct AppConfig {
    pub health_addr: String,
}

pub static APP_CONFIG: LazyLock<AppConfig> =
    LazyLock::new(|| AppConfig { health_addr: parse_env("HEALTH_ADDR", "0.0.0.0:8080") });
