pub mod message_create;
pub mod ready;
