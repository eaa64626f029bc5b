use twilight_cache_inmemory::DefaultInMemoryCache;
use twilight_model::{
    guild::Permissions,
    id::{
        Id,
        marker::{GuildMarker, RoleMarker, UserMarker},
    },
};
use twilight_util::permission_calculator::PermissionCalculator;

pub struct PermissionService;

impl PermissionService {
    /// Guild-level permissions from the cached owner, `@everyone` and the member's roles.
    pub fn root(
        cache: &DefaultInMemoryCache,
        guild_id: Id<GuildMarker>,
        user_id: Id<UserMarker>,
        member_roles: &[Id<RoleMarker>],
    ) -> Option<Permissions> {
        let owner_id = cache.guild(guild_id)?.owner_id();

        let everyone = cache
            .role(guild_id.cast())
            .map(|role| role.permissions)
            .unwrap_or_else(Permissions::empty);

        let roles: Vec<(Id<RoleMarker>, Permissions)> = member_roles
            .iter()
            .filter_map(|id| cache.role(*id).map(|role| (*id, role.permissions)))
            .collect();

        let permissions = PermissionCalculator::new(guild_id, user_id, everyone, &roles)
            .owner_id(owner_id)
            .root();
        Some(permissions)
    }

    pub fn is_admin(
        cache: &DefaultInMemoryCache,
        guild_id: Id<GuildMarker>,
        user_id: Id<UserMarker>,
        member_roles: &[Id<RoleMarker>],
    ) -> bool {
        match Self::root(cache, guild_id, user_id, member_roles) {
            Some(permissions) => permissions.contains(Permissions::ADMINISTRATOR),
            None => {
                tracing::warn!(guild_id = guild_id.get(), "guild not cached, denying admin command");
                false
            }
        }
    }
}
