use std::sync::Arc;

use bancheck_bot::context::{Context, ContextBuilder, mock_http};
use tempfile::TempDir;
use twilight_model::id::Id;

use super::{
    event::{BOT_ID, ready_event},
    guild::{cache_guild, make_guild, make_role},
};

pub const GUILD_ID: u64 = 10;

/// Context wired to the mock Discord client, a throwaway config file and `api_url`.
///
/// The returned directory must outlive the context.
pub fn build_context(api_url: &str) -> (Arc<Context>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ContextBuilder::new()
        .http(mock_http::MockClient::new())
        .store_path(dir.path().join("config.json"))
        .prefixes(vec!["!".to_owned(), "/".to_owned()])
        .api_url(api_url)
        .build()
        .expect("failed to build Context");

    ctx.cache.update(&ready_event(BOT_ID, &[GUILD_ID]));
    cache_guild(
        &ctx.cache,
        make_guild(
            Id::new(GUILD_ID),
            "test guild",
            vec![make_role(GUILD_ID, "@everyone", 0)],
        ),
    );

    (Arc::new(ctx), dir)
}
