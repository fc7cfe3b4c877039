//! Shapeguard Invoke
//!
//! Wrap functions so every call is shape-checked.
//!
//! Responsibilities:
//! - Validate declared parameter names once, when a function is wrapped
//! - Resolve each constrained parameter by name or by position
//! - Check inputs before the function runs, so conflicts waste no work
//! - Check the return value together with every input afterwards
//! - Pass the function's own result and errors through untouched

mod args;
mod error;
mod wrapper;

pub use args::{Args, CallArgs};
pub use error::{CallError, CallResult};
pub use wrapper::ConstrainedFn;
