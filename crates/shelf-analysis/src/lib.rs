//! Static dependency analysis for UI component libraries.
//!
//! `shelf-analysis` scans a directory of component sources, extracts their
//! import specifiers, classifies each one (external package, sibling
//! component, shared utility), resolves build-tool path aliases and writes
//! one dependency manifest per component.
//!
//! # Pipeline
//!
//! - [`walker`] - lists the files of a component directory
//! - [`extract`] - finds import specifiers in source text
//! - [`classify`] - sorts a specifier into an [`ImportKind`]
//! - [`alias`] - parses alias declarations and resolves aliased specifiers
//! - [`analyzer`] - drives the above per component, following shared
//!   utilities transitively through the [`AnalysisRun`] cache
//! - [`writer`] - serializes [`ComponentRecord`]s into the registry
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shelf_analysis::{AnalysisRun, AnalyzerConfig, NativeFileSystem, RegistryWriter};
//!
//! # fn main() -> shelf_analysis::Result<()> {
//! let config = AnalyzerConfig::new(".");
//! let mut run = AnalysisRun::new(config, Arc::new(NativeFileSystem));
//!
//! let record = run.analyze_component("Button")?;
//! let path = RegistryWriter::new(&run).write(&record)?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod alias;
pub mod analyzer;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod fs;
pub mod record;
pub mod walker;
pub mod writer;

#[cfg(test)]
mod tests;

pub use alias::{AliasTable, resolve_specifier};
pub use analyzer::{AnalysisCache, AnalysisRun, CacheEntry, Contribution};
pub use classify::{ImportClassifier, ImportKind};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, ErrorCategory, Result};
pub use extract::extract_imports;
pub use fs::{FileSystem, FsError, NativeFileSystem};
pub use record::{ComponentRecord, Dependencies};
pub use walker::walk_component;
pub use writer::{BatchEvent, BatchOutcome, BatchReport, RegistryWriter};
