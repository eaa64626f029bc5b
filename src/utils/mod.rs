pub mod avatar;
pub mod env;
pub mod mention;
pub mod time;
