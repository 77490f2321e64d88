//! Component file discovery.
//!
//! Lists every regular file below a component directory in depth-first
//! pre-order. Story and test files are left out; they are not shipped with
//! the component.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};

static EXCLUDED_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(stories|test)").expect("valid exclusion pattern"));

/// Whether a file name marks a story or test file.
pub fn is_excluded(file_name: &str) -> bool {
    EXCLUDED_FILE.is_match(file_name)
}

/// List the files of `dir` as root-relative, `/`-separated paths.
///
/// Siblings are visited in file-name order so the result is identical across
/// platforms. Symlinks are not followed. Fails if `dir` does not exist;
/// callers check for the component directory first.
pub fn walk_component(config: &AnalyzerConfig, dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| AnalysisError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if is_excluded(&entry.file_name().to_string_lossy()) {
            tracing::trace!(file = %entry.path().display(), "skipping story/test file");
            continue;
        }

        files.push(config.relative(entry.path()));
    }

    Ok(files)
}
