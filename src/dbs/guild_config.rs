use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError, RwLock},
};

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, GuildMarker},
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access guild config file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed guild config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("guild config contains an invalid guild id: {0}")]
    InvalidGuildId(u64),
}

/// On-disk shape of a single guild entry.
#[derive(Debug, Serialize, Deserialize)]
struct GuildConfig {
    #[serde(deserialize_with = "snowflake")]
    channel_id: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSnowflake {
    Int(u64),
    Str(String),
}

fn snowflake<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawSnowflake::deserialize(deserializer)? {
        RawSnowflake::Int(v) => v,
        RawSnowflake::Str(s) => s.trim().parse().map_err(D::Error::custom)?,
    };
    if value == 0 {
        return Err(D::Error::custom("snowflake must be non-zero"));
    }
    Ok(value)
}

/// Guild id to ban-check channel mapping, persisted as a single JSON file.
///
/// Every mutation rewrites the whole file while holding `writer`, so writers
/// inside one process never interleave. Readers only contend with the brief
/// swap of the in-memory map, which happens once the file write succeeded.
#[derive(Debug)]
pub struct GuildConfigStore {
    path: PathBuf,
    channels: RwLock<HashMap<Id<GuildMarker>, Id<ChannelMarker>>>,
    writer: Mutex<()>,
}

impl GuildConfigStore {
    /// Reads `path`, or starts empty if the file does not exist.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let channels = match fs::read(&path) {
            Ok(bytes) => Self::decode(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(path = %path.display(), guilds = channels.len(), "loaded guild config");

        Ok(Self { path, channels: RwLock::new(channels), writer: Mutex::new(()) })
    }

    fn decode(bytes: &[u8]) -> Result<HashMap<Id<GuildMarker>, Id<ChannelMarker>>, StoreError> {
        let raw: BTreeMap<u64, GuildConfig> = serde_json::from_slice(bytes)?;

        raw.into_iter()
            .map(|(guild_id, cfg)| {
                let guild_id =
                    Id::new_checked(guild_id).ok_or(StoreError::InvalidGuildId(guild_id))?;
                Ok((guild_id, Id::new(cfg.channel_id)))
            })
            .collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_channel(&self, guild_id: Id<GuildMarker>) -> Option<Id<ChannelMarker>> {
        self.channels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&guild_id)
            .copied()
    }

    pub fn set_channel(
        &self,
        guild_id: Id<GuildMarker>,
        channel_id: Id<ChannelMarker>,
    ) -> Result<(), StoreError> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = self.snapshot();
        next.insert(guild_id, channel_id);
        self.persist(&next)?;
        self.commit(next);
        Ok(())
    }

    /// Returns `false` without touching the file when nothing was configured.
    pub fn remove_channel(&self, guild_id: Id<GuildMarker>) -> Result<bool, StoreError> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = self.snapshot();
        if next.remove(&guild_id).is_none() {
            return Ok(false);
        }
        self.persist(&next)?;
        self.commit(next);
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.channels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> HashMap<Id<GuildMarker>, Id<ChannelMarker>> {
        self.channels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn commit(&self, next: HashMap<Id<GuildMarker>, Id<ChannelMarker>>) {
        *self
            .channels
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
    }

    fn persist(&self, channels: &HashMap<Id<GuildMarker>, Id<ChannelMarker>>) -> Result<(), StoreError> {
        let raw: BTreeMap<u64, GuildConfig> = channels
            .iter()
            .map(|(guild_id, channel_id)| (guild_id.get(), GuildConfig { channel_id: channel_id.get() }))
            .collect();
        let json = serde_json::to_vec_pretty(&raw)?;

        // Written beside the target and renamed so readers never see a half-written file.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), guilds = raw.len(), "persisted guild config");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/guild_config.rs"]
mod tests;
