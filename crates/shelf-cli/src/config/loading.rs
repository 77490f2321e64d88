use std::path::Path;

use figment::{
    Figment,
    providers::{Format as _, Serialized, Toml},
};

use crate::config::{CONFIG_FILE, ShelfConfig};
use crate::error::{ConfigError, Result};

impl ShelfConfig {
    /// Load configuration for the project rooted at `root`.
    /// Priority: shelf.toml > defaults
    pub fn load(root: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = root.join(CONFIG_FILE);
        if config_file.is_file() {
            tracing::debug!(path = %config_file.display(), "loading config file");
            figment = figment.merge(Toml::file(&config_file));
        }

        let config: Self = figment.extract().map_err(|e| ConfigError::Parse {
            path: config_file.clone(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }
}
