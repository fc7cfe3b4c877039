//! Declaration definition types.

use shapeguard_core::ShapeConstraint;

/// Reserved declaration key for the return value's constraint.
pub const RETURN_KEY: &str = "ret";

/// Source label used when reporting on the return value.
pub const RETURN_SOURCE: &str = "return value";

/// A constraint declared for one named parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    /// Parameter name.
    pub name: String,
    /// Declared shape constraint.
    pub constraint: ShapeConstraint,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, constraint: ShapeConstraint) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }
}
