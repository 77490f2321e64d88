//! Command implementations for the Shelf CLI.
//!
//! - [`generate`] - analyze components and write their manifests

pub mod generate;

pub use generate::execute as generate_execute;
