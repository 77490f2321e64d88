//! Command-line interface definition for Shelf.
//!
//! # Command Structure
//!
//! - `shelf generate <component>` - write the manifest of one component
//! - `shelf generate --all` - write the manifest of every component

mod commands;

use clap::Parser;

pub use commands::{Command, GenerateArgs, Target};

/// Shelf - dependency manifests for a UI component registry
#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    version,
    about = "Generate dependency manifests for UI components",
    long_about = "Shelf scans the components of a UI library, follows their imports through\n\
                  shared utility code and writes one registry manifest per component listing\n\
                  the packages, sibling components and shared files it needs."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows each analyzed file, alias loading and cache reuse.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
