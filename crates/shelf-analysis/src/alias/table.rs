//! Alias table extraction from build configuration text.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::fs::FileSystem;

// Matches `{ find: '@', replacement: path.resolve(__dirname, 'src') }`.
// Coupled to this exact shape: reordering keys or using another helper than
// `path.resolve(__dirname, ...)` hides the alias.
static ALIAS_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\{\s*find:\s*['"]([^'"]+)['"]\s*,\s*replacement:\s*path\.resolve\(\s*__dirname\s*,\s*['"]([^'"]+)['"]\s*\)\s*,?\s*\}"#,
    )
    .expect("valid alias pattern")
});

/// Alias token → root-relative directory, most specific alias first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
}

impl AliasTable {
    /// Build a table from explicit pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let mut table = Self::default();
        for (alias, dir) in pairs {
            table.insert(alias.into(), dir.into());
        }
        table
    }

    /// Extract every alias declaration from build configuration source.
    ///
    /// When an alias is declared twice the first declaration wins.
    pub fn parse(config_source: &str) -> Self {
        let mut table = Self::default();
        for caps in ALIAS_DECLARATION.captures_iter(config_source) {
            let alias = caps[1].to_string();
            if table.entries.iter().any(|(existing, _)| *existing == alias) {
                continue;
            }
            table.insert(alias, caps[2].to_string());
        }
        table
    }

    /// Read and parse the configured build configuration file.
    pub fn load(config: &AnalyzerConfig, fs: &dyn FileSystem) -> Result<Self> {
        let path = config.build_config_path();
        let source = fs
            .read_to_string(&path)
            .map_err(|source| AnalysisError::Read {
                path: path.clone(),
                source,
            })?;

        let table = Self::parse(&source);
        tracing::debug!(
            config = %path.display(),
            aliases = table.len(),
            "loaded path aliases"
        );
        Ok(table)
    }

    fn insert(&mut self, alias: String, dir: String) {
        let dir = normalize_dir(&dir);
        self.entries.push((alias, dir));
        // Longest alias first so `@components` is tried before `@`
        self.entries
            .sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, d)| (a.as_str(), d.as_str()))
    }

    /// Replace the alias at the start of `specifier` with its directory.
    ///
    /// An alias only matches a whole path segment: `@` matches `@/shared/x`
    /// and `@`, never `@scope/pkg`.
    pub fn substitute(&self, specifier: &str) -> Option<String> {
        self.entries.iter().find_map(|(alias, dir)| {
            let rest = specifier.strip_prefix(alias.as_str())?;
            if rest.is_empty() {
                Some(dir.clone())
            } else if let Some(rest) = rest.strip_prefix('/') {
                if dir.is_empty() {
                    Some(rest.to_string())
                } else {
                    Some(format!("{dir}/{rest}"))
                }
            } else {
                None
            }
        })
    }
}

fn normalize_dir(dir: &str) -> String {
    let dir = dir.trim_start_matches("./");
    dir.trim_end_matches('/').to_string()
}
