use serde::Deserialize;

use crate::infra::config::{AppConfig, FeedConfig, LogConfig, ProfileConfig, StartupConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub feed: Option<FileFeedConfig>,
    pub profile: Option<FileProfileConfig>,
    pub startup: Option<FileStartupConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(feed) = self.feed {
            feed.merge_into(&mut config.feed);
        }

        if let Some(profile) = self.profile {
            profile.merge_into(&mut config.profile);
        }

        if let Some(startup) = self.startup {
            startup.merge_into(&mut config.startup);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileFeedConfig {
    pub removal_latency_ms: Option<u64>,
}

impl FileFeedConfig {
    fn merge_into(self, config: &mut FeedConfig) {
        if let Some(latency_ms) = self.removal_latency_ms {
            config.removal_latency_ms = latency_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileProfileConfig {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl FileProfileConfig {
    fn merge_into(self, config: &mut ProfileConfig) {
        if let Some(user_id) = self.user_id {
            config.user_id = user_id;
        }

        if let Some(name) = self.name {
            config.name = name;
        }

        if let Some(avatar) = self.avatar {
            config.avatar = avatar;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileStartupConfig {
    pub seed_sample_feed: Option<bool>,
}

impl FileStartupConfig {
    fn merge_into(self, config: &mut StartupConfig) {
        if let Some(seed) = self.seed_sample_feed {
            config.seed_sample_feed = seed;
        }
    }
}
