pub mod guild_config;

pub use guild_config::{GuildConfigStore, StoreError};
