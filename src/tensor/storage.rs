//! Storage: owned, aligned host memory for tensor elements

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

/// Word type backing every buffer; its alignment covers every element type
type Word = u64;
const WORD_BYTES: usize = std::mem::size_of::<Word>();

/// Storage for tensor data
///
/// A dense buffer of `len` elements of a single dtype. The buffer is kept as
/// 8-byte words so typed views of any element type are correctly aligned.
/// `len` is the allocated capacity; a tensor's logical shape may describe fewer
/// elements.
#[derive(Clone, PartialEq, Eq)]
pub struct Storage {
    words: Vec<Word>,
    /// Number of elements (not bytes)
    len: usize,
    /// Element type
    dtype: DType,
}

impl Storage {
    /// Allocate zero-initialised storage for `len` elements of `dtype`
    pub fn new(len: usize, dtype: DType) -> Self {
        let n_words = (len * dtype.size_in_bytes()).div_ceil(WORD_BYTES);
        Self {
            words: vec![0; n_words],
            len,
            dtype,
        }
    }

    /// Create storage from existing data with inferred dtype
    pub fn from_slice<T: Element>(data: &[T]) -> Self {
        let mut storage = Self::new(data.len(), T::DTYPE);
        storage.bytes_mut().copy_from_slice(bytemuck::cast_slice(data));
        storage
    }

    /// Create storage from raw bytes with explicit dtype
    ///
    /// Returns an error if `data` is not a whole number of elements.
    pub fn from_bytes(data: &[u8], dtype: DType) -> Result<Self> {
        let elem_size = dtype.size_in_bytes();
        if data.len() % elem_size != 0 {
            return Err(Error::invalid_argument(
                "data",
                format!(
                    "{} bytes is not a multiple of the {} element size {}",
                    data.len(),
                    dtype,
                    elem_size
                ),
            ));
        }
        let mut storage = Self::new(data.len() / elem_size, dtype);
        storage.bytes_mut().copy_from_slice(data);
        Ok(storage)
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if storage is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Get size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.len * self.dtype.size_in_bytes()
    }

    /// Raw bytes of the allocated elements
    pub fn bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<Word, u8>(&self.words)[..self.size_in_bytes()]
    }

    /// Mutable raw bytes of the allocated elements
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        let size = self.size_in_bytes();
        &mut bytemuck::cast_slice_mut::<Word, u8>(&mut self.words)[..size]
    }

    /// Typed view of all allocated elements
    ///
    /// `T` must be the Rust type backing this storage's dtype (`u8` for Bool).
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        self.check_element::<T>()?;
        Ok(&bytemuck::cast_slice::<Word, T>(&self.words)[..self.len])
    }

    /// Mutable typed view of all allocated elements
    pub fn as_mut_slice<T: Element>(&mut self) -> Result<&mut [T]> {
        self.check_element::<T>()?;
        let len = self.len;
        Ok(&mut bytemuck::cast_slice_mut::<Word, T>(&mut self.words)[..len])
    }

    fn check_element<T: Element>(&self) -> Result<()> {
        if T::DTYPE == self.dtype.storage_dtype() {
            Ok(())
        } else {
            Err(Error::DTypeMismatch {
                expected: self.dtype,
                got: T::DTYPE,
            })
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.len)
            .field("dtype", &self.dtype)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let storage = Storage::new(5, DType::I16);
        assert_eq!(storage.len(), 5);
        assert_eq!(storage.size_in_bytes(), 10);
        assert_eq!(storage.as_slice::<i16>().unwrap(), &[0; 5]);
    }

    #[test]
    fn test_from_slice_roundtrip() {
        let storage = Storage::from_slice(&[1.5f64, -2.0, 3.25]);
        assert_eq!(storage.dtype(), DType::F64);
        assert_eq!(storage.as_slice::<f64>().unwrap(), &[1.5, -2.0, 3.25]);
    }

    #[test]
    fn test_bool_backed_by_u8() {
        let storage = Storage::from_bytes(&[1, 0, 1], DType::Bool).unwrap();
        assert_eq!(storage.as_slice::<u8>().unwrap(), &[1, 0, 1]);
        assert!(matches!(
            storage.as_slice::<i8>(),
            Err(Error::DTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_wrong_element_type() {
        let storage = Storage::new(2, DType::F32);
        assert_eq!(
            storage.as_slice::<i32>().unwrap_err(),
            Error::DTypeMismatch {
                expected: DType::F32,
                got: DType::I32,
            }
        );
    }

    #[test]
    fn test_from_bytes_rejects_partial_element() {
        assert!(Storage::from_bytes(&[0u8; 6], DType::F32).is_err());
        assert_eq!(Storage::from_bytes(&[0u8; 8], DType::F32).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_storage() {
        let storage = Storage::new(0, DType::F64);
        assert!(storage.is_empty());
        assert!(storage.bytes().is_empty());
        assert!(storage.as_slice::<f64>().unwrap().is_empty());
    }
}
