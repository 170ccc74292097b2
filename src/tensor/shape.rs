//! Shape type: dimensions of a tensor

use smallvec::SmallVec;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;

/// Stack allocation threshold for dimensions
/// Most tensors have 4 or fewer dimensions, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Shape type: dimensions of a tensor
///
/// An empty shape describes a scalar, which holds exactly one element.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// Create an empty (scalar) shape.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// View shape as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of dimensions in this shape.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements; zero if any extent is zero, one for a scalar.
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.0.iter().product()
    }

    /// Whether every extent of `self` is no larger than the matching extent of
    /// `bound`. Shapes of different rank never fit.
    pub fn fits_within(&self, bound: &[usize]) -> bool {
        self.0.len() == bound.len() && self.0.iter().zip(bound).all(|(&d, &b)| d <= b)
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl From<Vec<usize>> for Shape {
    fn from(value: Vec<usize>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elem_count() {
        assert_eq!(Shape::from([2, 3]).elem_count(), 6);
        assert_eq!(Shape::from([3, 4, 0, 5]).elem_count(), 0);
        assert_eq!(Shape::new().elem_count(), 1);
    }

    #[test]
    fn test_fits_within() {
        let shape = Shape::from([2, 3]);
        assert!(shape.fits_within(&[2, 3]));
        assert!(shape.fits_within(&[10, 10]));
        assert!(!shape.fits_within(&[1, 10]));
        assert!(!shape.fits_within(&[100]));
        assert!(Shape::from([0, 4]).fits_within(&[0, 4]));
        assert!(Shape::new().fits_within(&[]));
    }

    #[test]
    fn test_conversions() {
        let from_vec = Shape::from(vec![1, 2, 3, 4, 5]);
        let from_slice = Shape::from(&[1usize, 2, 3, 4, 5][..]);
        let collected: Shape = (1..=5).collect();
        assert_eq!(from_vec, from_slice);
        assert_eq!(from_vec, collected);
        assert_eq!(from_vec.ndim(), 5);
        assert_eq!(format!("{:?}", from_vec), "[1, 2, 3, 4, 5]");
    }
}
