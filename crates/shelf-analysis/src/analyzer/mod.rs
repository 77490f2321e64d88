//! Per-component dependency analysis.
//!
//! [`AnalysisRun`] owns everything one generator invocation shares across
//! components: configuration, filesystem, the lazily loaded alias table and
//! the shared-utility cache. Construct one per invocation (or per test) and
//! pass it explicitly.
//!
//! For each component the run walks its directory, extracts the imports of
//! every source file and sorts them into the three dependency sets. Shared
//! utilities are resolved to files and analyzed recursively so their own
//! external and shared imports are absorbed. Each shared file is analyzed
//! once per run. An import cycle between shared files is cut where it closes;
//! files inside the cycle see a partial result and stay uncached until a
//! reference from outside the cycle recomputes them, so every cached
//! contribution is complete.

mod cache;

pub use cache::{AnalysisCache, CacheEntry, Contribution};

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::alias::{AliasTable, resolve_specifier};
use crate::classify::{ImportClassifier, ImportKind};
use crate::config::{AnalyzerConfig, has_source_extension};
use crate::error::{AnalysisError, Result};
use crate::extract::extract_imports;
use crate::fs::FileSystem;
use crate::record::ComponentRecord;
use crate::walker::walk_component;

/// State of one generator invocation.
#[derive(Debug)]
pub struct AnalysisRun {
    config: AnalyzerConfig,
    fs: Arc<dyn FileSystem>,
    classifier: ImportClassifier,
    aliases: Option<AliasTable>,
    cache: AnalysisCache,
    /// Shared files currently being analyzed, outermost first.
    in_progress: Vec<String>,
    truncated_cycles: usize,
}

impl AnalysisRun {
    pub fn new(config: AnalyzerConfig, fs: Arc<dyn FileSystem>) -> Self {
        let classifier = ImportClassifier::new(&config);
        Self {
            config,
            fs,
            classifier,
            aliases: None,
            cache: AnalysisCache::new(),
            in_progress: Vec::new(),
            truncated_cycles: 0,
        }
    }

    /// Use `aliases` instead of reading the build configuration.
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = Some(aliases);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// Shared handle to the run's filesystem.
    pub fn fs_handle(&self) -> Arc<dyn FileSystem> {
        Arc::clone(&self.fs)
    }

    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    /// How many times an import cycle cut shared-utility analysis short.
    pub fn truncated_cycles(&self) -> usize {
        self.truncated_cycles
    }

    /// Forget cached shared-utility results.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.in_progress.clear();
        self.truncated_cycles = 0;
    }

    /// Names of every component directory, sorted.
    pub fn list_components(&self) -> Result<Vec<String>> {
        let root = self.config.components_root();
        self.fs
            .list_subdirs(&root)
            .map_err(|source| AnalysisError::Read { path: root, source })
    }

    /// Build the dependency record of component `name`.
    pub fn analyze_component(&mut self, name: &str) -> Result<ComponentRecord> {
        let dir = self.config.component_dir(name);
        if !self.fs.is_dir(&dir) {
            return Err(AnalysisError::ComponentNotFound {
                name: name.to_string(),
                dir,
            });
        }

        let files = walk_component(&self.config, &dir)?;
        tracing::debug!(component = name, files = files.len(), "analyzing component");

        let mut external = BTreeSet::new();
        let mut registry = BTreeSet::new();
        let mut shared = BTreeSet::new();

        for file in files.iter().filter(|file| has_source_extension(file)) {
            for specifier in self.read_imports(file)? {
                match self.classifier.classify(&specifier) {
                    ImportKind::External => {
                        external.insert(specifier);
                    }
                    ImportKind::Registry(sibling) => {
                        registry.insert(sibling);
                    }
                    ImportKind::Shared => {
                        let (resolved, contribution) = self.follow_shared(&specifier)?;
                        shared.insert(resolved);
                        external.extend(contribution.external);
                        shared.extend(contribution.shared);
                    }
                    ImportKind::Peer | ImportKind::Unresolved => {}
                }
            }
        }

        Ok(ComponentRecord::new(name, external, registry, shared, files))
    }

    /// Resolve a shared-utility specifier and analyze the file it names.
    fn follow_shared(&mut self, specifier: &str) -> Result<(String, Contribution)> {
        let resolved = self.resolve(specifier)?;
        let (contribution, _) = self.analyze_shared_file(&resolved)?;
        Ok((resolved, contribution))
    }

    fn resolve(&mut self, specifier: &str) -> Result<String> {
        if self.aliases.is_none() {
            let table = AliasTable::load(&self.config, self.fs.as_ref())?;
            self.aliases = Some(table);
        }
        let aliases = self.aliases.get_or_insert_with(AliasTable::default);
        resolve_specifier(specifier, aliases, &self.config, self.fs.as_ref())
    }

    /// Analyze one shared file.
    ///
    /// Also returns the lowest depth in `in_progress` that a cycle below this
    /// file closed at, or `usize::MAX` when none stays open. A file whose
    /// result depends on an ancestor still in progress is not cached: the
    /// ancestor's own imports are missing from it.
    fn analyze_shared_file(&mut self, path: &str) -> Result<(Contribution, usize)> {
        match self.cache.get(path) {
            Some(CacheEntry::Complete(contribution)) => {
                tracing::trace!(file = path, "shared analysis cache hit");
                return Ok((contribution.clone(), usize::MAX));
            }
            Some(CacheEntry::InProgress) => {
                tracing::warn!(
                    file = path,
                    "import cycle between shared files, transitive dependencies may be incomplete"
                );
                self.truncated_cycles += 1;
                let depth = self
                    .in_progress
                    .iter()
                    .position(|open| open == path)
                    .unwrap_or(0);
                return Ok((Contribution::truncated(), depth));
            }
            None => {}
        }

        let depth = self.in_progress.len();
        self.in_progress.push(path.to_string());
        self.cache.begin(path);
        let collected = self.collect_shared(path);
        self.in_progress.pop();

        match collected {
            Ok((mut contribution, low)) if low >= depth => {
                // Every cycle through this file closed here, and this file's
                // own imports are already in the sets.
                contribution.partial = false;
                self.cache.complete(path, contribution.clone());
                Ok((contribution, usize::MAX))
            }
            Ok((contribution, low)) => {
                tracing::debug!(file = path, "leaving cyclic result uncached");
                self.cache.abandon(path);
                Ok((contribution, low))
            }
            Err(err) => {
                self.cache.abandon(path);
                Err(err)
            }
        }
    }

    fn collect_shared(&mut self, path: &str) -> Result<(Contribution, usize)> {
        let mut contribution = Contribution::default();
        let mut low = usize::MAX;

        // Stylesheets, JSON and the like have no imports to follow
        if !has_source_extension(path) {
            return Ok((contribution, low));
        }

        for specifier in self.read_imports(path)? {
            match self.classifier.classify(&specifier) {
                ImportKind::External => {
                    contribution.external.insert(specifier);
                }
                ImportKind::Shared => {
                    let resolved = self.resolve(&specifier)?;
                    let (nested, nested_low) = self.analyze_shared_file(&resolved)?;
                    contribution.shared.insert(resolved);
                    contribution.absorb(&nested);
                    low = low.min(nested_low);
                }
                ImportKind::Registry(sibling) => {
                    tracing::debug!(
                        file = path,
                        component = %sibling,
                        "ignoring component import from shared code"
                    );
                }
                ImportKind::Peer | ImportKind::Unresolved => {}
            }
        }

        Ok((contribution, low))
    }

    fn read_imports(&self, path: &str) -> Result<Vec<String>> {
        let absolute = self.config.absolute(path);
        let source = self
            .fs
            .read_to_string(&absolute)
            .map_err(|source| AnalysisError::Read {
                path: absolute.clone(),
                source,
            })?;

        let imports = extract_imports(&source, path);
        tracing::debug!(file = path, imports = imports.len(), "extracted imports");
        Ok(imports)
    }
}
