use crate::infra::{config::AppConfig, error::AppError};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig, AppError>;
}

/// Hands back a fixed configuration; used where no file should be touched.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticConfigAdapter {
    pub config: AppConfig,
}

#[cfg(test)]
impl ConfigAdapter for StaticConfigAdapter {
    fn load(&self) -> Result<AppConfig, AppError> {
        Ok(self.config.clone())
    }
}
