//! Matching actual shapes against declared constraints.

use shapeguard_core::{Dim, Shape, ShapeConstraint, ShapeError, ShapeResult};

use crate::{Bindings, MatchConfig, RepeatPolicy};

/// Shape matcher that checks one source at a time.
#[derive(Debug, Clone, Default)]
pub struct ShapeMatcher {
    config: MatchConfig,
}

impl ShapeMatcher {
    /// Create a matcher with the default (permissive) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with the given configuration.
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match an actual shape against a constraint.
    ///
    /// Checks rank first, then each position in order. Literal positions
    /// must match exactly; template positions are recorded in the returned
    /// bindings. The first failure aborts the match.
    pub fn match_shape(
        &self,
        source: &str,
        shape: &Shape,
        constraint: &ShapeConstraint,
    ) -> ShapeResult<Bindings> {
        if shape.rank() != constraint.rank() {
            return Err(ShapeError::rank_mismatch(
                source,
                shape.clone(),
                constraint.clone(),
            ));
        }

        let mut bindings = Bindings::new(source);

        for (index, (dim, &actual)) in constraint.iter().zip(shape.dims()).enumerate() {
            match dim {
                Dim::Var(name) => {
                    if let Some(previous) = bindings.insert(name.as_str(), actual) {
                        self.check_repeat(source, name, previous, actual)?;
                    }
                }
                Dim::Fixed(expected) => {
                    if actual != *expected {
                        return Err(ShapeError::dimension_mismatch(
                            source,
                            index,
                            *expected,
                            shape.clone(),
                            constraint.clone(),
                        ));
                    }
                }
            }
        }

        tracing::trace!(source, rank = shape.rank(), bindings = bindings.len(), "shape matched");

        Ok(bindings)
    }

    /// Handle a template variable seen twice within one constraint.
    fn check_repeat(&self, source: &str, name: &str, previous: usize, actual: usize) -> ShapeResult<()> {
        if previous == actual {
            return Ok(());
        }

        match self.config.repeat_policy {
            RepeatPolicy::LastWins => {
                tracing::warn!(
                    source,
                    var = name,
                    previous,
                    actual,
                    "repeated template variable disagrees within one constraint, keeping last"
                );
                Ok(())
            }
            RepeatPolicy::Consistent => Err(ShapeError::template_conflict(
                name, previous, actual, source, source,
            )),
        }
    }
}

/// Match with the default configuration.
pub fn match_shape(source: &str, shape: &Shape, constraint: &ShapeConstraint) -> ShapeResult<Bindings> {
    ShapeMatcher::new().match_shape(source, shape, constraint)
}
