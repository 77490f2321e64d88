//! Configuration for Shelf, loaded from an optional `shelf.toml`.
//!
//! Defaults describe the standard component library layout; the file may
//! override any key. Unknown keys are rejected.

mod defaults;
mod loading;
mod tests;
mod validation;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shelf_analysis::AnalyzerConfig;

pub use defaults::*;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "shelf.toml";

/// Shelf configuration - loaded from shelf.toml over built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShelfConfig {
    /// Directory holding one subdirectory per component
    #[serde(default = "default_components_dir")]
    pub components_dir: PathBuf,

    /// Directory receiving `<name>.json` manifests
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Build configuration declaring path aliases
    #[serde(default = "default_build_config")]
    pub build_config: PathBuf,

    /// Packages provided by the consuming application
    #[serde(default = "default_peer_dependencies")]
    pub peer_dependencies: Vec<String>,

    #[serde(default = "default_alias_prefix")]
    pub alias_prefix: String,

    #[serde(default = "default_shared_prefix")]
    pub shared_prefix: String,

    #[serde(default = "default_registry_prefix")]
    pub registry_prefix: String,

    /// Exit non-zero from `generate --all` when any component failed
    #[serde(default)]
    pub fail_on_batch_error: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            components_dir: default_components_dir(),
            output_dir: default_output_dir(),
            build_config: default_build_config(),
            peer_dependencies: default_peer_dependencies(),
            alias_prefix: default_alias_prefix(),
            shared_prefix: default_shared_prefix(),
            registry_prefix: default_registry_prefix(),
            fail_on_batch_error: false,
        }
    }
}

impl ShelfConfig {
    /// Analyzer settings for a project rooted at `root`.
    pub fn analyzer_config(&self, root: &Path) -> AnalyzerConfig {
        let mut config =
            AnalyzerConfig::new(root).peer_dependencies(self.peer_dependencies.iter().cloned());
        config.components_dir = self.components_dir.clone();
        config.output_dir = self.output_dir.clone();
        config.build_config = self.build_config.clone();
        config.alias_prefix = self.alias_prefix.clone();
        config.shared_prefix = self.shared_prefix.clone();
        config.registry_prefix = self.registry_prefix.clone();
        config
    }
}
