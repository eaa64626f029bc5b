pub mod app;
pub mod ban_check;
pub mod discord;
