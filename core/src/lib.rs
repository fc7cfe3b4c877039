//! Shapeguard Core Types
//!
//! This crate provides the vocabulary shared by every other shapeguard crate:
//! - Dimension specifiers and shape constraints (Dim, ShapeConstraint)
//! - Actual runtime shapes (Shape)
//! - The shape capability every constrained value must provide (HasShape)
//! - Call-time error types (ShapeError)

mod dim;
mod error;
mod shape;

pub use dim::*;
pub use error::*;
pub use shape::*;
