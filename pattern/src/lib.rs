//! Shapeguard Pattern
//!
//! Match actual shapes against declared constraints.
//!
//! Responsibilities:
//! - Verify rank against the declared constraint
//! - Check literal dimensions exactly
//! - Collect template variable bindings per source

mod binding;
mod config;
mod matcher;

pub use binding::Bindings;
pub use config::{MatchConfig, RepeatPolicy};
pub use matcher::{match_shape, ShapeMatcher};
