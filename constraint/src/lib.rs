//! Shapeguard Constraint
//!
//! Validate template variable bindings across every constrained source.
//!
//! Responsibilities:
//! - Merge the per-source bindings of one invocation
//! - Reject any template variable that resolves to two different sizes
//! - Name both conflicting sizes and the sources they came from

mod checker;

pub use checker::{reconcile, ConsistencyChecker, Resolution, Resolved};
