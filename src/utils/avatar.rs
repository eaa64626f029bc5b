use twilight_model::user::User;

const CDN: &str = "https://cdn.discordapp.com";

pub fn avatar_url(user: &User) -> String {
    match user.avatar {
        Some(hash) => {
            let ext = if hash.is_animated() { "gif" } else { "png" };
            format!("{CDN}/avatars/{}/{hash}.{ext}", user.id)
        }
        None => default_avatar_url(user),
    }
}

pub fn default_avatar_url(user: &User) -> String {
    let index = if user.discriminator == 0 {
        (user.id.get() >> 22) % 6
    } else {
        u64::from(user.discriminator % 5)
    };
    format!("{CDN}/embed/avatars/{index}.png")
}

#[cfg(test)]
#[path = "tests/avatar.rs"]
mod tests;
