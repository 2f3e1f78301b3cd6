use std::path::{Path, PathBuf};

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
    error::AppError,
};

/// Reads `config.toml` (or an explicit path) and overlays it on defaults.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig, AppError> {
        load(self.path.as_deref())
    }
}
