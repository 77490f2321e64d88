//! Error types for component analysis and registry generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::fs::FsError;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors raised while analyzing a component or writing its manifest.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Component directory not found: {}", dir.display())]
    ComponentNotFound { name: String, dir: PathBuf },

    #[error("Cannot resolve '{specifier}' (tried {})", tried.join(", "))]
    UnresolvedSpecifier {
        specifier: String,
        tried: Vec<String>,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("Failed to list {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to serialize manifest for {name}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Operator-facing classification of an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A component directory or a shared module is missing.
    NotFound,
    /// An underlying read failed.
    ReadFailure,
    /// Output could not be produced.
    Other,
}

impl AnalysisError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::ComponentNotFound { .. } | AnalysisError::UnresolvedSpecifier { .. } => {
                ErrorCategory::NotFound
            }
            AnalysisError::Read { .. } | AnalysisError::Walk { .. } => ErrorCategory::ReadFailure,
            AnalysisError::Write { .. } | AnalysisError::Serialize { .. } => ErrorCategory::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_message_lists_candidates() {
        let err = AnalysisError::UnresolvedSpecifier {
            specifier: "@/shared/lib/missing".into(),
            tried: vec!["src/shared/lib/missing.ts".into(), "src/shared/lib/missing.tsx".into()],
        };
        assert_eq!(
            err.to_string(),
            "Cannot resolve '@/shared/lib/missing' (tried src/shared/lib/missing.ts, src/shared/lib/missing.tsx)"
        );
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn read_errors_are_read_failures() {
        let err = AnalysisError::Read {
            path: PathBuf::from("vite.config.ts"),
            source: FsError::NotFound(PathBuf::from("vite.config.ts")),
        };
        assert_eq!(err.category(), ErrorCategory::ReadFailure);
    }
}
