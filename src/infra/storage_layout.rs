use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "welearn";
const LOG_FILE_NAME: &str = "welearn.log";

/// Where the client keeps files of its own. Only logs live here; feed data
/// is in memory for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub state_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let state_base = env::var_os("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| home_dir().map(|home| home.join(".local").join("state")))
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve state base directory (XDG_STATE_HOME/HOME)".into(),
            })?;

        Ok(Self::under(state_base.join(APP_DIR_NAME)))
    }

    pub fn under(state_dir: PathBuf) -> Self {
        let log_dir = state_dir.join("logs");
        Self { state_dir, log_dir }
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.state_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }

    pub fn log_file_name(&self) -> &'static str {
        LOG_FILE_NAME
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}
