//! Filesystem abstraction for the analyzer.
//!
//! Every read, write and existence check the analyzer performs goes through
//! the [`FileSystem`] trait. [`NativeFileSystem`] delegates to `std::fs`;
//! tests wrap it to count reads or to inject failures.

use std::path::{Path, PathBuf};

/// Result type for filesystem operations
pub type FsResult<T> = Result<T, FsError>;

/// Errors that can occur during filesystem operations
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            FsError::NotFound(path.to_path_buf())
        } else {
            FsError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Blocking filesystem operations used by the analyzer.
///
/// All paths are absolute or relative to the process working directory; the
/// analyzer joins them onto the project root before calling in.
pub trait FileSystem: Send + Sync + std::fmt::Debug {
    /// Read a file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> FsResult<String>;

    /// Write a file, replacing any existing content
    fn write(&self, path: &Path, contents: &str) -> FsResult<()>;

    /// Check if a path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// List the names of the immediate subdirectories of `path`, sorted
    fn list_subdirs(&self, path: &Path) -> FsResult<Vec<String>>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileSystem;

impl FileSystem for NativeFileSystem {
    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, contents: &str) -> FsResult<()> {
        std::fs::write(path, contents).map_err(|e| FsError::from_io(path, e))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn list_subdirs(&self, path: &Path) -> FsResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            let file_type = entry.file_type().map_err(|e| FsError::from_io(path, e))?;
            if file_type.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
