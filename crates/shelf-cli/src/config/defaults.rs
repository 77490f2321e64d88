use std::path::PathBuf;

use shelf_analysis::config::{
    DEFAULT_ALIAS_PREFIX, DEFAULT_BUILD_CONFIG, DEFAULT_COMPONENTS_DIR, DEFAULT_OUTPUT_DIR,
    DEFAULT_PEER_DEPENDENCIES, DEFAULT_REGISTRY_PREFIX, DEFAULT_SHARED_PREFIX,
};

pub fn default_components_dir() -> PathBuf {
    PathBuf::from(DEFAULT_COMPONENTS_DIR)
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

pub fn default_build_config() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_CONFIG)
}

pub fn default_peer_dependencies() -> Vec<String> {
    DEFAULT_PEER_DEPENDENCIES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

pub fn default_alias_prefix() -> String {
    DEFAULT_ALIAS_PREFIX.to_string()
}

pub fn default_shared_prefix() -> String {
    DEFAULT_SHARED_PREFIX.to_string()
}

pub fn default_registry_prefix() -> String {
    DEFAULT_REGISTRY_PREFIX.to_string()
}
