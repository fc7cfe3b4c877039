//! Call-time shape errors.

use crate::{Shape, ShapeConstraint};
use thiserror::Error;

/// Errors raised while checking actual shapes against declared constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The actual rank differs from the declared rank.
    #[error("\"{source_name}\" has shape {shape} but constraint is {constraint}")]
    RankMismatch {
        source_name: String,
        shape: Shape,
        constraint: ShapeConstraint,
    },

    /// A literal dimension disagrees with the actual size at that position.
    #[error("\"{source_name}\" {shape} shape[{index}] does not match {expected} in {constraint}")]
    DimensionMismatch {
        source_name: String,
        index: usize,
        expected: usize,
        shape: Shape,
        constraint: ShapeConstraint,
    },

    /// One template variable resolved to two different sizes.
    #[error("template <{var}> has mismatched values {first} != {second} (\"{first_source}\" vs \"{second_source}\")")]
    TemplateConflict {
        var: String,
        first: usize,
        second: usize,
        first_source: String,
        second_source: String,
    },
}

impl ShapeError {
    pub fn rank_mismatch(
        source_name: impl Into<String>,
        shape: Shape,
        constraint: ShapeConstraint,
    ) -> Self {
        Self::RankMismatch {
            source_name: source_name.into(),
            shape,
            constraint,
        }
    }

    pub fn dimension_mismatch(
        source_name: impl Into<String>,
        index: usize,
        expected: usize,
        shape: Shape,
        constraint: ShapeConstraint,
    ) -> Self {
        Self::DimensionMismatch {
            source_name: source_name.into(),
            index,
            expected,
            shape,
            constraint,
        }
    }

    pub fn template_conflict(
        var: impl Into<String>,
        first: usize,
        second: usize,
        first_source: impl Into<String>,
        second_source: impl Into<String>,
    ) -> Self {
        Self::TemplateConflict {
            var: var.into(),
            first,
            second,
            first_source: first_source.into(),
            second_source: second_source.into(),
        }
    }

    /// The parameter (or `return value`) the error was found on.
    ///
    /// For a template conflict this is the source that introduced the
    /// disagreeing size.
    pub fn source_name(&self) -> &str {
        match self {
            Self::RankMismatch { source_name, .. } => source_name,
            Self::DimensionMismatch { source_name, .. } => source_name,
            Self::TemplateConflict { second_source, .. } => second_source,
        }
    }
}

/// Result type for shape checks.
pub type ShapeResult<T> = Result<T, ShapeError>;
