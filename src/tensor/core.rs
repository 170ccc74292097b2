//! Core Tensor type

use super::{Layout, Shape, ShapeDynamism, Storage, TensorId};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array in host memory
///
/// `Tensor` consists of:
/// - **Storage**: owned element buffer; its length is the allocated capacity
/// - **Layout**: logical shape, strides, and offset into the storage
/// - **Dynamism**: how an operation writing into this tensor may change its shape
/// - **Bound shape**: the shape the storage was allocated for
///
/// For a static tensor the bound shape always equals the logical shape. A
/// dynamic-bound tensor may have a smaller logical shape than its bound.
///
/// # Example
///
/// ```
/// use tensorcast::tensor::Tensor;
///
/// let t = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
/// assert_eq!(t.shape(), &[2, 2]);
/// assert_eq!(t.to_vec::<f32>(), [1.0, 2.0, 3.0, 4.0]);
/// ```
pub struct Tensor {
    id: TensorId,
    storage: Storage,
    layout: Layout,
    dynamism: ShapeDynamism,
    bound: Shape,
}

impl Tensor {
    /// Create a static tensor from storage and layout
    ///
    /// Returns an error if the layout addresses elements outside the storage.
    pub fn from_parts(storage: Storage, layout: Layout) -> Result<Self> {
        check_layout_in_bounds(&layout, storage.len())?;
        let bound = Shape::from(layout.shape());
        Ok(Self {
            id: TensorId::new(),
            storage,
            layout,
            dynamism: ShapeDynamism::Static,
            bound,
        })
    }

    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape).expect("Tensor::from_slice failed")
    }

    /// Create a tensor from a slice of data (fallible version)
    pub fn try_from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        check_data_len(data.len(), shape)?;
        Self::from_parts(Storage::from_slice(data), Layout::contiguous(shape))
    }

    /// Create a Bool tensor from a slice of booleans
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    pub fn from_bools(data: &[bool], shape: &[usize]) -> Self {
        Self::try_from_bools(data, shape).expect("Tensor::from_bools failed")
    }

    /// Create a Bool tensor from a slice of booleans (fallible version)
    pub fn try_from_bools(data: &[bool], shape: &[usize]) -> Result<Self> {
        check_data_len(data.len(), shape)?;
        let bytes: Vec<u8> = data.iter().map(|&b| u8::from(b)).collect();
        let storage = Storage::from_bytes(&bytes, DType::Bool)?;
        Self::from_parts(storage, Layout::contiguous(shape))
    }

    /// Create a static tensor filled with zeros
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        Self::zeros_with_dynamism(shape, dtype, ShapeDynamism::Static)
    }

    /// Create a tensor filled with zeros with the given shape dynamism
    ///
    /// For [`ShapeDynamism::DynamicBound`] `shape` is the upper bound.
    pub fn zeros_with_dynamism(shape: &[usize], dtype: DType, dynamism: ShapeDynamism) -> Self {
        let layout = Layout::contiguous(shape);
        let storage = Storage::new(layout.elem_count(), dtype);
        Self {
            id: TensorId::new(),
            storage,
            layout,
            dynamism,
            bound: Shape::from(shape),
        }
    }

    /// Create a static zero tensor with the same shape as `other`
    pub fn zeros_like(other: &Tensor, dtype: DType) -> Self {
        Self::zeros(other.shape(), dtype)
    }

    /// Replace the shape dynamism policy
    pub fn with_dynamism(mut self, dynamism: ShapeDynamism) -> Self {
        self.dynamism = dynamism;
        self
    }

    /// Unique ID of this tensor
    #[inline]
    pub fn id(&self) -> TensorId {
        self.id
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Logical shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Shape the storage was allocated for
    #[inline]
    pub fn bound_shape(&self) -> &[usize] {
        &self.bound
    }

    /// Allocated capacity in elements
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of dimensions
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Number of logical elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Shape, strides, and offset
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Shape dynamism policy
    #[inline]
    pub fn dynamism(&self) -> ShapeDynamism {
        self.dynamism
    }

    /// Whether the logical elements are laid out row-major from offset 0
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Underlying storage
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut Storage {
        &mut self.storage
    }

    /// Narrow or widen the logical shape without touching the storage.
    ///
    /// Callers must ensure the new shape fits in the allocated capacity.
    pub(crate) fn set_logical_shape(&mut self, shape: &[usize]) {
        debug_assert!(shape.iter().product::<usize>() <= self.storage.len());
        self.layout = Layout::contiguous(shape);
    }

    /// Reallocate to exactly `shape`. Contents are zeroed when the element
    /// count changes.
    pub(crate) fn reallocate(&mut self, shape: &[usize]) {
        let layout = Layout::contiguous(shape);
        if layout.elem_count() != self.storage.len() {
            self.storage = Storage::new(layout.elem_count(), self.storage.dtype());
        }
        self.layout = layout;
        self.bound = Shape::from(shape);
    }

    /// Copy the logical elements out in row-major order
    ///
    /// # Panics
    ///
    /// Panics if `T` does not back this tensor's dtype or the tensor is not
    /// contiguous. Use [`Self::try_to_vec`] for a fallible version.
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        self.try_to_vec().expect("Tensor::to_vec failed")
    }

    /// Copy the logical elements out in row-major order (fallible version)
    pub fn try_to_vec<T: Element>(&self) -> Result<Vec<T>> {
        if !self.is_contiguous() {
            return Err(Error::NotContiguous { arg: "self" });
        }
        let data = self.storage.as_slice::<T>()?;
        Ok(data[..self.numel()].to_vec())
    }

    /// Read a Bool tensor back as booleans
    ///
    /// # Panics
    ///
    /// Panics if the tensor is not a contiguous Bool tensor.
    pub fn to_bool_vec(&self) -> Vec<bool> {
        assert_eq!(self.dtype(), DType::Bool, "to_bool_vec on non-bool tensor");
        self.to_vec::<u8>().into_iter().map(|b| b != 0).collect()
    }
}

impl Clone for Tensor {
    /// Deep copy with a fresh ID
    fn clone(&self) -> Self {
        Self {
            id: TensorId::new(),
            storage: self.storage.clone(),
            layout: self.layout.clone(),
            dynamism: self.dynamism,
            bound: self.bound.clone(),
        }
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("id", &self.id)
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("dynamism", &self.dynamism)
            .field("bound", &self.bound)
            .field("contiguous", &self.is_contiguous())
            .finish()
    }
}

fn check_data_len(len: usize, shape: &[usize]) -> Result<()> {
    let expected_len: usize = shape.iter().product();
    if len != expected_len {
        return Err(Error::ShapeMismatch {
            expected: shape.to_vec(),
            got: vec![len],
        });
    }
    Ok(())
}

fn check_layout_in_bounds(layout: &Layout, storage_len: usize) -> Result<()> {
    if layout.elem_count() == 0 {
        return Ok(());
    }

    let mut lo = layout.offset() as isize;
    let mut hi = lo;
    for (&dim, &stride) in layout.shape().iter().zip(layout.strides()) {
        let span = (dim as isize - 1) * stride;
        if span < 0 {
            lo += span;
        } else {
            hi += span;
        }
    }

    if lo < 0 || hi as usize >= storage_len {
        return Err(Error::invalid_argument(
            "layout",
            format!(
                "layout {:?} addresses elements outside storage of {} elements",
                layout, storage_len
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::SmallVec;

    #[test]
    fn test_from_slice() {
        let t = Tensor::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]);
        assert_eq!(t.dtype(), DType::I32);
        assert_eq!(t.numel(), 6);
        assert_eq!(t.capacity(), 6);
        assert_eq!(t.dynamism(), ShapeDynamism::Static);
        assert_eq!(t.to_vec::<i32>(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_slice_length_mismatch() {
        let err = Tensor::try_from_slice(&[1.0f32, 2.0], &[3]).unwrap_err();
        assert_eq!(err, Error::shape_mismatch(&[3], &[2]));
    }

    #[test]
    fn test_scalar_tensor() {
        let t = Tensor::from_slice(&[10.0f64], &[]);
        assert_eq!(t.ndim(), 0);
        assert_eq!(t.numel(), 1);
        assert_eq!(t.to_vec::<f64>(), [10.0]);
    }

    #[test]
    fn test_zero_extent_tensor() {
        let t = Tensor::zeros(&[3, 4, 0, 5], DType::I8);
        assert_eq!(t.numel(), 0);
        assert_eq!(t.capacity(), 0);
        assert!(t.to_vec::<i8>().is_empty());
    }

    #[test]
    fn test_bools() {
        let t = Tensor::from_bools(&[true, false, true], &[3]);
        assert_eq!(t.dtype(), DType::Bool);
        assert_eq!(t.to_vec::<u8>(), [1, 0, 1]);
        assert_eq!(t.to_bool_vec(), [true, false, true]);
    }

    #[test]
    fn test_bound_shape() {
        let t = Tensor::zeros_with_dynamism(&[10, 10], DType::F32, ShapeDynamism::DynamicBound);
        assert_eq!(t.bound_shape(), &[10, 10]);
        assert_eq!(t.capacity(), 100);
    }

    #[test]
    fn test_set_logical_shape_keeps_storage() {
        let mut t =
            Tensor::zeros_with_dynamism(&[10, 10], DType::F32, ShapeDynamism::DynamicBound);
        t.set_logical_shape(&[2, 3]);
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.bound_shape(), &[10, 10]);
        assert_eq!(t.capacity(), 100);
        assert_eq!(t.to_vec::<f32>().len(), 6);
    }

    #[test]
    fn test_reallocate() {
        let mut t = Tensor::zeros_with_dynamism(&[1, 1], DType::I64, ShapeDynamism::DynamicUnbound);
        t.reallocate(&[2, 3]);
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.bound_shape(), &[2, 3]);
        assert_eq!(t.capacity(), 6);
    }

    #[test]
    fn test_clone_gets_new_id() {
        let t = Tensor::from_slice(&[1u8, 2], &[2]);
        let c = t.clone();
        assert_ne!(t.id(), c.id());
        assert_eq!(c.to_vec::<u8>(), [1, 2]);
    }

    #[test]
    fn test_from_parts_rejects_out_of_bounds_layout() {
        let storage = Storage::from_slice(&[1.0f32, 2.0, 3.0, 4.0]);
        let layout = Layout::new(Shape::from([2, 2]), SmallVec::from_slice(&[4, 1]), 0);
        assert!(Tensor::from_parts(storage, layout).is_err());
    }

    #[test]
    fn test_non_contiguous_readback_fails() {
        let storage = Storage::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let layout = Layout::contiguous(&[2, 3]).transpose(0, 1).unwrap();
        let t = Tensor::from_parts(storage, layout).unwrap();
        assert!(!t.is_contiguous());
        assert_eq!(
            t.try_to_vec::<f32>().unwrap_err(),
            Error::NotContiguous { arg: "self" }
        );
    }
}
