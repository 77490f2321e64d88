use crate::config::ShelfConfig;
use crate::error::{ConfigError, Result};

fn invalid(field: &str, value: &str, hint: impl Into<String>) -> crate::error::CliError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        hint: hint.into(),
    }
    .into()
}

impl ShelfConfig {
    /// Validate configuration for logical consistency.
    ///
    /// The prefixes must nest: every registry specifier is a shared
    /// specifier, and every shared specifier is aliased.
    pub fn validate(&self) -> Result<()> {
        if self.alias_prefix.is_empty() {
            return Err(invalid(
                "alias_prefix",
                "",
                "The alias prefix cannot be empty",
            ));
        }

        if !self.shared_prefix.starts_with(&self.alias_prefix) {
            return Err(invalid(
                "shared_prefix",
                &self.shared_prefix,
                format!("Must start with alias_prefix '{}'", self.alias_prefix),
            ));
        }

        if !self.registry_prefix.starts_with(&self.shared_prefix)
            || self.registry_prefix == self.shared_prefix
        {
            return Err(invalid(
                "registry_prefix",
                &self.registry_prefix,
                format!(
                    "Must extend shared_prefix '{}' with the components path",
                    self.shared_prefix
                ),
            ));
        }

        if self.components_dir.as_os_str().is_empty() {
            return Err(invalid(
                "components_dir",
                "",
                "Point it at the directory holding one folder per component",
            ));
        }

        if let Some(peer) = self.peer_dependencies.iter().find(|p| p.trim().is_empty()) {
            return Err(invalid(
                "peer_dependencies",
                peer,
                "Peer dependencies are package names",
            ));
        }

        Ok(())
    }
}
