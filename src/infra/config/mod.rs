mod adapter;
mod app_config;
mod file_config;
mod loader;

pub use adapter::FileConfigAdapter;
pub use app_config::{AppConfig, FeedConfig, LogConfig, ProfileConfig, StartupConfig};
pub use loader::load;
