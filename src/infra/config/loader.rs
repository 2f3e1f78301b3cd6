use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[logging]
level = "debug"

[feed]
removal_latency_ms = 250

[profile]
name = "Dana"
"#,
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.feed.removal_latency_ms, 250);
        assert_eq!(config.profile.name, "Dana");
        assert_eq!(config.profile.user_id, "current-user");
        assert!(config.startup.seed_sample_feed);
    }

    #[test]
    fn rejects_malformed_toml_with_path_in_error() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let config_path = dir.path().join("broken.toml");
        fs::write(&config_path, "[feed]\nremoval_latency_ms = \"soon\"\n")
            .expect("must write test config");

        let err = load(Some(&config_path)).expect_err("malformed config must fail");

        assert!(matches!(err, AppError::ConfigParse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
