//! The DeclarationTable - immutable constraint lookup.

use crate::{DeclarationBuilder, ParamDecl, RegistryError};
use shapeguard_core::ShapeConstraint;

/// Shape constraints declared for one function.
///
/// Immutable after construction via DeclarationBuilder; safe to share
/// between threads without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationTable {
    /// Parameter constraints in declaration order.
    params: Vec<ParamDecl>,
    /// Return value constraint, if declared.
    ret: Option<ShapeConstraint>,
}

impl DeclarationTable {
    /// Create a table (use DeclarationBuilder for construction).
    pub(crate) fn new(params: Vec<ParamDecl>, ret: Option<ShapeConstraint>) -> Self {
        Self { params, ret }
    }

    /// Start building a table.
    pub fn builder() -> DeclarationBuilder {
        DeclarationBuilder::new()
    }

    /// Parse a table from a JSON object of `name -> [dims...]`.
    ///
    /// The reserved `ret` key declares the return value's constraint.
    /// Integers are literal dimensions, strings are template variables.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let decls: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut builder = DeclarationBuilder::new();
        for (name, value) in decls {
            let constraint: ShapeConstraint = serde_json::from_value(value)
                .map_err(|e| RegistryError::invalid_declaration(&name, e.to_string()))?;
            builder = builder.param(name, constraint);
        }
        builder.build()
    }

    /// Get all parameter constraints in declaration order.
    pub fn params(&self) -> &[ParamDecl] {
        &self.params
    }

    /// Get the constraint declared for a parameter.
    pub fn get(&self, name: &str) -> Option<&ShapeConstraint> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.constraint)
    }

    /// Get the return value constraint.
    pub fn return_constraint(&self) -> Option<&ShapeConstraint> {
        self.ret.as_ref()
    }

    /// Check if a return value constraint is declared.
    pub fn has_return(&self) -> bool {
        self.ret.is_some()
    }

    /// Check if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.ret.is_none()
    }

    /// Check every declared parameter against a function's parameter names.
    ///
    /// Runs once, when a function is wrapped.
    pub fn validate<S: AsRef<str>>(&self, signature: &[S]) -> Result<(), RegistryError> {
        for decl in &self.params {
            if !signature.iter().any(|p| p.as_ref() == decl.name) {
                return Err(RegistryError::UnknownParameter(decl.name.clone()));
            }
        }
        Ok(())
    }
}
