//! Actual shapes and the capability of having one.

use crate::dim::write_tuple;
use std::fmt;
use std::ops::Index;

/// The extent of a runtime value along each axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape(pub Vec<usize>);

impl Shape {
    /// Create a shape from its dimensions.
    pub fn new(dims: Vec<usize>) -> Self {
        Self(dims)
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// The dimensions in order.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Get one dimension.
    pub fn get(&self, axis: usize) -> Option<usize> {
        self.0.get(axis).copied()
    }
}

impl Index<usize> for Shape {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.0[axis]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.0)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self(dims.to_vec())
    }
}

/// A value that can describe its own shape.
///
/// This is the only thing the checker ever asks of an argument or a return
/// value. Element values, dtype and layout are never inspected.
pub trait HasShape {
    /// The ordered dimensions of this value.
    fn shape(&self) -> Shape;
}

impl HasShape for Shape {
    fn shape(&self) -> Shape {
        self.clone()
    }
}

impl HasShape for Vec<usize> {
    fn shape(&self) -> Shape {
        Shape(self.clone())
    }
}

impl HasShape for [usize] {
    fn shape(&self) -> Shape {
        Shape(self.to_vec())
    }
}

impl<const N: usize> HasShape for [usize; N] {
    fn shape(&self) -> Shape {
        Shape(self.to_vec())
    }
}

impl<T: HasShape + ?Sized> HasShape for &T {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: HasShape + ?Sized> HasShape for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: HasShape + ?Sized> HasShape for std::sync::Arc<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

#[cfg(feature = "ndarray")]
impl<S, D> HasShape for ndarray::ArrayBase<S, D>
where
    S: ndarray::RawData,
    D: ndarray::Dimension,
{
    fn shape(&self) -> Shape {
        Shape::from(ndarray::ArrayBase::shape(self))
    }
}
