//! DeclarationBuilder for constructing an immutable DeclarationTable.

use crate::{DeclarationTable, ParamDecl, RETURN_KEY};
use shapeguard_core::ShapeConstraint;
use thiserror::Error;

/// Errors that can occur while declaring constraints.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("\"{0}\" not found in function signature.")]
    UnknownParameter(String),

    #[error("Duplicate constraint for parameter: {0}")]
    DuplicateParameter(String),

    #[error("Duplicate return value constraint")]
    DuplicateReturn,

    #[error("Invalid constraint for \"{name}\": {message}")]
    InvalidDeclaration { name: String, message: String },

    #[error("Invalid declaration table: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    pub fn invalid_declaration(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDeclaration {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Builder for constructing an immutable DeclarationTable.
#[derive(Debug, Default)]
pub struct DeclarationBuilder {
    /// Parameter constraints being built, in declaration order.
    params: Vec<ParamDecl>,
    /// Return value constraints being built.
    returns: Vec<ShapeConstraint>,
}

impl DeclarationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a parameter's constraint.
    ///
    /// The reserved `ret` key declares the return value instead.
    pub fn param(mut self, name: impl Into<String>, constraint: ShapeConstraint) -> Self {
        let name = name.into();
        if name == RETURN_KEY {
            self.returns.push(constraint);
        } else {
            self.params.push(ParamDecl::new(name, constraint));
        }
        self
    }

    /// Declare the return value's constraint.
    pub fn returns(mut self, constraint: ShapeConstraint) -> Self {
        self.returns.push(constraint);
        self
    }

    /// Build the immutable DeclarationTable.
    pub fn build(self) -> Result<DeclarationTable, RegistryError> {
        // Check for duplicate names
        for (i, decl) in self.params.iter().enumerate() {
            if self.params[..i].iter().any(|p| p.name == decl.name) {
                return Err(RegistryError::DuplicateParameter(decl.name.clone()));
            }
        }

        let mut returns = self.returns.into_iter();
        let ret = returns.next();
        if returns.next().is_some() {
            return Err(RegistryError::DuplicateReturn);
        }

        Ok(DeclarationTable::new(self.params, ret))
    }
}
