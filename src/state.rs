pub mod app_settings;
pub mod app_state;
pub mod gesture;
pub mod messages;
pub mod ticker;
