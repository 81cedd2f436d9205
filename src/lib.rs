// Daily Grapher Library
// 24-hour clock face layout for calendar activities

pub mod models;
pub mod services;
pub mod utils;

pub use models::config::{CardConfig, CardError};
pub use models::layout::{CardFrame, Layout, RenderDescriptor};
pub use services::card::{CardHandle, DailyGrapherCard};
