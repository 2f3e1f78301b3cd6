use serde::{Deserialize, Serialize};

use crate::domain::message_ledger::DEFAULT_CURRENT_USER_ID;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub feed: FeedConfig,
    pub profile: ProfileConfig,
    pub startup: StartupConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedConfig {
    /// Delay between a delete request and the post leaving the feed.
    pub removal_latency_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            removal_latency_ms: 1_500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileConfig {
    pub user_id: String,
    pub name: String,
    pub avatar: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_CURRENT_USER_ID.to_owned(),
            name: "You".to_owned(),
            avatar: "/avatars/you.png".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartupConfig {
    pub seed_sample_feed: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            seed_sample_feed: true,
        }
    }
}
