//! Analyzer configuration.

use std::path::{Path, PathBuf};

/// Directory, relative to the project root, holding one subdirectory per UI component.
pub const DEFAULT_COMPONENTS_DIR: &str = "src/shared/ui";

/// Directory, relative to the project root, receiving the manifests.
pub const DEFAULT_OUTPUT_DIR: &str = "registry";

/// Build-tool configuration declaring the path aliases.
pub const DEFAULT_BUILD_CONFIG: &str = "vite.config.ts";

/// Prefix marking an aliased (internal) specifier.
pub const DEFAULT_ALIAS_PREFIX: &str = "@/";

/// Prefix of shared code reachable through the alias.
pub const DEFAULT_SHARED_PREFIX: &str = "@/shared/";

/// Prefix of sibling UI components reachable through the alias.
pub const DEFAULT_REGISTRY_PREFIX: &str = "@/shared/ui/";

/// Packages the consuming application provides.
pub const DEFAULT_PEER_DEPENDENCIES: &[&str] = &["react"];

/// Extensions of files whose imports are analyzed, in resolution probe order.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Configuration for one [`AnalysisRun`](crate::AnalysisRun).
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Project root; every other path is relative to it.
    pub root: PathBuf,

    /// Components directory, relative to `root`.
    pub components_dir: PathBuf,

    /// Manifest output directory, relative to `root`.
    pub output_dir: PathBuf,

    /// Build configuration file holding alias declarations, relative to `root`.
    pub build_config: PathBuf,

    /// Specifiers starting with this prefix are internal.
    pub alias_prefix: String,

    /// Internal specifiers starting with this prefix are shared utilities...
    pub shared_prefix: String,

    /// ...unless they start with this one, in which case they are sibling components.
    pub registry_prefix: String,

    /// External packages never recorded in a manifest.
    pub peer_dependencies: Vec<String>,
}

impl AnalyzerConfig {
    /// Create a configuration with the default layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            components_dir: PathBuf::from(DEFAULT_COMPONENTS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            build_config: PathBuf::from(DEFAULT_BUILD_CONFIG),
            alias_prefix: DEFAULT_ALIAS_PREFIX.to_string(),
            shared_prefix: DEFAULT_SHARED_PREFIX.to_string(),
            registry_prefix: DEFAULT_REGISTRY_PREFIX.to_string(),
            peer_dependencies: DEFAULT_PEER_DEPENDENCIES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// Replace the peer dependency allow-list.
    pub fn peer_dependencies(mut self, peers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.peer_dependencies = peers.into_iter().map(Into::into).collect();
        self
    }

    /// Absolute (or cwd-relative) path of the components directory.
    pub fn components_root(&self) -> PathBuf {
        self.root.join(&self.components_dir)
    }

    /// Directory of a single component.
    pub fn component_dir(&self, name: &str) -> PathBuf {
        self.components_root().join(name)
    }

    /// Path of the build configuration file.
    pub fn build_config_path(&self) -> PathBuf {
        self.root.join(&self.build_config)
    }

    /// Path of the manifest written for `name`.
    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.root.join(&self.output_dir).join(format!("{name}.json"))
    }

    /// Join a root-relative, `/`-separated path onto the root.
    pub fn absolute(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Express `path` relative to the root with `/` separators.
    ///
    /// Paths outside the root are returned unchanged.
    pub fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Whether `path` ends in one of the analyzed [`SOURCE_EXTENSIONS`].
pub fn has_source_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_component_library() {
        let config = AnalyzerConfig::new("/project");
        assert_eq!(
            config.component_dir("Button"),
            PathBuf::from("/project/src/shared/ui/Button")
        );
        assert_eq!(
            config.manifest_path("Button"),
            PathBuf::from("/project/registry/Button.json")
        );
        assert_eq!(config.peer_dependencies, vec!["react"]);
    }

    #[test]
    fn relative_uses_forward_slashes() {
        let config = AnalyzerConfig::new("/project");
        let path = PathBuf::from("/project").join("src").join("shared").join("a.ts");
        assert_eq!(config.relative(&path), "src/shared/a.ts");
    }

    #[test]
    fn source_extensions() {
        assert!(has_source_extension("src/a.tsx"));
        assert!(has_source_extension("src/a.js"));
        assert!(!has_source_extension("src/a.module.css"));
        assert!(!has_source_extension("src/icon.svg"));
    }
}
