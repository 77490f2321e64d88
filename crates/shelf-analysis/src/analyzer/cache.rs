//! Memoization of shared-utility analysis.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

/// External and shared dependencies a shared-utility file brings in, its
/// transitive shared files included.
///
/// Registry imports are not part of a contribution: they are local to the
/// component that declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contribution {
    pub external: BTreeSet<String>,
    pub shared: BTreeSet<String>,
    /// Set when an import cycle cut the traversal short somewhere below
    /// this file, so the sets may be missing entries. Never cached.
    pub partial: bool,
}

impl Contribution {
    /// Empty contribution standing in for a file still being analyzed.
    pub fn truncated() -> Self {
        Self {
            partial: true,
            ..Self::default()
        }
    }

    pub fn absorb(&mut self, other: &Contribution) {
        self.external.extend(other.external.iter().cloned());
        self.shared.extend(other.shared.iter().cloned());
        self.partial |= other.partial;
    }
}

/// State of one file in the [`AnalysisCache`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    /// Analysis has started and not finished; seeing this again means a cycle.
    InProgress,
    Complete(Contribution),
}

/// Per-run cache keyed by root-relative resolved path.
#[derive(Debug, Default)]
pub struct AnalysisCache {
    entries: FxHashMap<String, CacheEntry>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&CacheEntry> {
        self.entries.get(path)
    }

    /// Mark `path` as being analyzed.
    pub fn begin(&mut self, path: &str) {
        self.entries.insert(path.to_string(), CacheEntry::InProgress);
    }

    pub fn complete(&mut self, path: &str, contribution: Contribution) {
        self.entries
            .insert(path.to_string(), CacheEntry::Complete(contribution));
    }

    /// Drop the marker of an analysis that failed.
    pub fn abandon(&mut self, path: &str) {
        if matches!(self.entries.get(path), Some(CacheEntry::InProgress)) {
            self.entries.remove(path);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
