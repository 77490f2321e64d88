//! Path alias handling.
//!
//! Alias declarations are read from the build-tool configuration (e.g.
//! `@` → `src`) and used to turn an aliased specifier into a concrete,
//! root-relative file path.

mod resolve;
mod table;

pub use resolve::{candidates, resolve_specifier};
pub use table::AliasTable;
