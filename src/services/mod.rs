pub mod ban_check;
pub mod channel;
pub mod health;
pub mod permission;
