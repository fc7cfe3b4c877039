//! Invocation error types.

use shapeguard_core::ShapeError;
use std::error::Error;
use std::fmt;

/// Errors from calling a wrapped function that can itself fail.
#[derive(Debug)]
pub enum CallError<E> {
    /// A shape constraint was violated.
    Shape(ShapeError),
    /// The wrapped function failed; its error is carried untouched.
    Function(E),
}

impl<E> CallError<E> {
    /// Check if this is a shape violation.
    pub fn is_shape(&self) -> bool {
        matches!(self, CallError::Shape(_))
    }

    /// Get the shape violation, if any.
    pub fn shape_error(&self) -> Option<&ShapeError> {
        match self {
            CallError::Shape(e) => Some(e),
            CallError::Function(_) => None,
        }
    }

    /// Get the wrapped function's error, if any.
    pub fn function_error(&self) -> Option<&E> {
        match self {
            CallError::Shape(_) => None,
            CallError::Function(e) => Some(e),
        }
    }

    /// Take the wrapped function's error by value.
    pub fn into_function_error(self) -> Option<E> {
        match self {
            CallError::Shape(_) => None,
            CallError::Function(e) => Some(e),
        }
    }
}

impl<E> From<ShapeError> for CallError<E> {
    fn from(e: ShapeError) -> Self {
        CallError::Shape(e)
    }
}

impl<E: fmt::Display> fmt::Display for CallError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::Shape(e) => write!(f, "{}", e),
            CallError::Function(e) => write!(f, "{}", e),
        }
    }
}

impl<E: Error + 'static> Error for CallError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CallError::Shape(e) => e.source(),
            CallError::Function(e) => e.source(),
        }
    }
}

/// Result type for fallible wrapped calls.
pub type CallResult<T, E> = Result<T, CallError<E>>;
