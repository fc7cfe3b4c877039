//! Dimension specifiers and shape constraints.
//!
//! A constraint is declared once, when a function is wrapped, and never
//! changes afterwards. Each position is either a literal size that must match
//! exactly or a named template variable that binds to whatever size appears.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a shape constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dim {
    /// Literal size; the actual dimension must be exactly this.
    Fixed(usize),
    /// Template variable; binds to the actual dimension.
    Var(String),
}

impl Dim {
    /// Create a literal dimension.
    pub fn fixed(size: usize) -> Self {
        Dim::Fixed(size)
    }

    /// Create a template variable.
    pub fn var(name: impl Into<String>) -> Self {
        Dim::Var(name.into())
    }

    /// Returns true if this is a literal dimension.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Dim::Fixed(_))
    }

    /// Returns true if this is a template variable.
    pub fn is_var(&self) -> bool {
        matches!(self, Dim::Var(_))
    }

    /// Get the literal size if this is a fixed dimension.
    pub fn as_fixed(&self) -> Option<usize> {
        match self {
            Dim::Fixed(n) => Some(*n),
            Dim::Var(_) => None,
        }
    }

    /// Get the variable name if this is a template variable.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Dim::Fixed(_) => None,
            Dim::Var(name) => Some(name),
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Fixed(n) => write!(f, "{}", n),
            Dim::Var(name) => write!(f, "'{}'", name),
        }
    }
}

impl From<usize> for Dim {
    fn from(n: usize) -> Self {
        Dim::Fixed(n)
    }
}

impl From<&str> for Dim {
    fn from(name: &str) -> Self {
        Dim::Var(name.to_string())
    }
}

impl From<String> for Dim {
    fn from(name: String) -> Self {
        Dim::Var(name)
    }
}

/// An ordered sequence of dimension specifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeConstraint {
    dims: Vec<Dim>,
}

impl ShapeConstraint {
    /// Create a constraint from its dimension specifiers.
    pub fn new(dims: Vec<Dim>) -> Self {
        Self { dims }
    }

    /// Number of dimensions the constrained value must have.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// The dimension specifiers in order.
    pub fn dims(&self) -> &[Dim] {
        &self.dims
    }

    /// Template variable names in order of first appearance.
    pub fn template_vars(&self) -> Vec<&str> {
        let mut vars: Vec<&str> = Vec::new();
        for name in self.dims.iter().filter_map(Dim::as_var) {
            if !vars.contains(&name) {
                vars.push(name);
            }
        }
        vars
    }

    /// Returns true if no position is a template variable.
    pub fn is_concrete(&self) -> bool {
        self.dims.iter().all(Dim::is_fixed)
    }

    /// Iterate over the dimension specifiers.
    pub fn iter(&self) -> impl Iterator<Item = &Dim> {
        self.dims.iter()
    }
}

impl fmt::Display for ShapeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.dims)
    }
}

impl From<Vec<Dim>> for ShapeConstraint {
    fn from(dims: Vec<Dim>) -> Self {
        Self::new(dims)
    }
}

impl FromIterator<Dim> for ShapeConstraint {
    fn from_iter<I: IntoIterator<Item = Dim>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ShapeConstraint {
    type Item = &'a Dim;
    type IntoIter = std::slice::Iter<'a, Dim>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.iter()
    }
}

/// Write items as a tuple: `()`, `(3,)`, `(3, 1)`.
pub(crate) fn write_tuple<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    if items.len() == 1 {
        write!(f, ",")?;
    }
    write!(f, ")")
}

/// Helper macro to declare a shape constraint.
///
/// Integer literals become fixed dimensions, string literals become template
/// variables: `dims![3, "N"]`.
#[macro_export]
macro_rules! dims {
    () => {
        $crate::ShapeConstraint::default()
    };
    ($($dim:expr),+ $(,)?) => {
        $crate::ShapeConstraint::new(vec![$($crate::Dim::from($dim)),+])
    };
}
