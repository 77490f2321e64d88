//! Shelf CLI - dependency manifests for a UI component registry.
//!
//! This crate exposes the analysis in `shelf-analysis` as the `shelf`
//! command.
//!
//! # Architecture
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - command implementations
//! - [`config`] - `shelf.toml` loading
//! - [`error`] - error types and their miette rendering
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use shelf_cli::{config::ShelfConfig, error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     let config = ShelfConfig::load(std::path::Path::new("."))?;
//!     println!("components in {}", config.components_dir.display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
