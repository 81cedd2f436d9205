// Module exports for models

pub mod activity;
pub mod config;
pub mod dial;
pub mod layout;
pub mod raw_event;
pub mod settings;
