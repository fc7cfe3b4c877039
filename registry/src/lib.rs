//! Shapeguard Registry
//!
//! Constraint declarations for wrapped functions. Single source of truth for
//! which parameters (and whether the return value) are shape-constrained.
//! A DeclarationTable is immutable after construction via DeclarationBuilder.

mod builder;
mod table;
mod types;

pub use builder::{DeclarationBuilder, RegistryError};
pub use table::DeclarationTable;
pub use types::*;
