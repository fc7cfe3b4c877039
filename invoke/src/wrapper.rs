//! Shape-checked function wrapper.

use shapeguard_constraint::ConsistencyChecker;
use shapeguard_core::{HasShape, ShapeResult};
use shapeguard_pattern::{Bindings, MatchConfig, ShapeMatcher};
use shapeguard_registry::{DeclarationTable, RegistryError, RETURN_SOURCE};
use std::fmt;
use std::sync::Arc;

use crate::args::{Args, CallArgs};
use crate::error::CallError;

/// A function together with the shape constraints of its parameters and
/// return value.
///
/// Every call matches the supplied arguments before the function runs and
/// the result after it returns. The declaration table is read-only and
/// shared; all bindings are local to the call that produced them.
#[derive(Clone)]
pub struct ConstrainedFn<F> {
    /// Declared parameter names, in positional order.
    params: Vec<String>,
    /// Constraints attached at wrap time.
    table: Arc<DeclarationTable>,
    matcher: ShapeMatcher,
    checker: ConsistencyChecker,
    func: F,
}

impl<F> fmt::Debug for ConstrainedFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstrainedFn")
            .field("params", &self.params)
            .field("table", &self.table)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

impl<F> ConstrainedFn<F> {
    /// Wrap an infallible function.
    ///
    /// `params` are the function's parameter names in positional order.
    /// Fails if the table constrains a parameter that is not among them.
    pub fn new<T, R, P>(params: P, table: DeclarationTable, func: F) -> Result<Self, RegistryError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        F: Fn(&CallArgs<'_, T>) -> R,
    {
        Self::wrap(params, table, func)
    }

    /// Wrap a function that returns its own errors.
    pub fn fallible<T, R, E, P>(
        params: P,
        table: DeclarationTable,
        func: F,
    ) -> Result<Self, RegistryError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        F: Fn(&CallArgs<'_, T>) -> Result<R, E>,
    {
        Self::wrap(params, table, func)
    }

    fn wrap<P>(params: P, table: DeclarationTable, func: F) -> Result<Self, RegistryError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let params: Vec<String> = params.into_iter().map(Into::into).collect();
        table.validate(&params)?;

        Ok(Self {
            params,
            table: Arc::new(table),
            matcher: ShapeMatcher::new(),
            checker: ConsistencyChecker::new(),
            func,
        })
    }

    /// Use a different matching configuration.
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.matcher = ShapeMatcher::with_config(config);
        self
    }

    /// The declared parameter names.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The declaration table.
    pub fn table(&self) -> &DeclarationTable {
        &self.table
    }

    /// Call an infallible wrapped function.
    pub fn call<T, R>(&self, args: &Args<T>) -> ShapeResult<R>
    where
        F: Fn(&CallArgs<'_, T>) -> R,
        T: HasShape,
        R: HasShape,
    {
        let inputs = self.check_inputs(args)?;

        tracing::debug!(sources = inputs.len(), "inputs satisfy shape constraints, executing");
        let result = (self.func)(&CallArgs::new(&self.params, args));

        self.check_output(&result, inputs)?;
        Ok(result)
    }

    /// Call a fallible wrapped function.
    ///
    /// An error returned by the function itself comes back as
    /// `CallError::Function` with the value unchanged.
    pub fn try_call<T, R, E>(&self, args: &Args<T>) -> Result<R, CallError<E>>
    where
        F: Fn(&CallArgs<'_, T>) -> Result<R, E>,
        T: HasShape,
        R: HasShape,
    {
        let inputs = self.check_inputs(args)?;

        tracing::debug!(sources = inputs.len(), "inputs satisfy shape constraints, executing");
        let result = (self.func)(&CallArgs::new(&self.params, args)).map_err(CallError::Function)?;

        self.check_output(&result, inputs)?;
        Ok(result)
    }

    /// Match every supplied, constrained argument and reconcile the bindings.
    ///
    /// Arguments that were not supplied are skipped. Returns the per-source
    /// bindings in declaration order.
    pub fn check_inputs<T: HasShape>(&self, args: &Args<T>) -> ShapeResult<Vec<Bindings>> {
        let call = CallArgs::new(&self.params, args);
        let mut collected = Vec::with_capacity(self.table.params().len() + 1);

        for decl in self.table.params() {
            let value = match call.get(&decl.name) {
                Some(v) => v,
                None => {
                    tracing::trace!(param = decl.name.as_str(), "argument not supplied, constraint skipped");
                    continue;
                }
            };
            collected.push(
                self.matcher
                    .match_shape(&decl.name, &value.shape(), &decl.constraint)?,
            );
        }

        self.checker.reconcile(&collected)?;
        Ok(collected)
    }

    /// Match the result and reconcile it together with every input.
    fn check_output<R: HasShape>(&self, result: &R, mut collected: Vec<Bindings>) -> ShapeResult<()> {
        let constraint = match self.table.return_constraint() {
            Some(c) => c,
            None => return Ok(()),
        };

        collected.push(
            self.matcher
                .match_shape(RETURN_SOURCE, &result.shape(), constraint)?,
        );
        let resolved = self.checker.reconcile(&collected)?;

        tracing::debug!(vars = resolved.len(), "return value satisfies shape constraints");
        Ok(())
    }
}
