//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};

/// Trait for types that can be elements of a tensor
///
/// This trait connects Rust's type system to tensorcast's runtime dtype system.
/// It's implemented for every Rust type that backs a [`DType`]'s storage.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - `PartialEq` - Element-wise comparison in readback and tests
///
/// Note: bool doesn't implement `Pod`, so `DType::Bool` is backed by `u8`.
pub trait Element: Copy + Send + Sync + Pod + Zeroable + PartialEq + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Truthiness used when casting to Bool
    ///
    /// NaN is nonzero; both signed zeros are zero.
    fn is_nonzero(self) -> bool;

    /// Value a boolean converts to: `1` for true, `0` for false
    #[inline]
    fn from_bool(v: bool) -> Self {
        if v { Self::one() } else { Self::zero() }
    }
}

macro_rules! impl_element_int {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn is_nonzero(self) -> bool {
                    self != 0
                }
            }
        )*
    };
}

impl_element_int!(i64 => I64, i32 => I32, i16 => I16, i8 => I8, u8 => U8);

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn is_nonzero(self) -> bool {
        self != 0.0
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn is_nonzero(self) -> bool {
        self != 0.0
    }
}

#[cfg(feature = "f16")]
impl Element for half::f16 {
    const DTYPE: DType = DType::F16;

    #[inline]
    fn zero() -> Self {
        half::f16::ZERO
    }

    #[inline]
    fn one() -> Self {
        half::f16::ONE
    }

    #[inline]
    fn is_nonzero(self) -> bool {
        self.to_f32() != 0.0
    }
}

#[cfg(feature = "f16")]
impl Element for half::bf16 {
    const DTYPE: DType = DType::BF16;

    #[inline]
    fn zero() -> Self {
        half::bf16::ZERO
    }

    #[inline]
    fn one() -> Self {
        half::bf16::ONE
    }

    #[inline]
    fn is_nonzero(self) -> bool {
        self.to_f32() != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_mapping() {
        assert_eq!(<f64 as Element>::DTYPE, DType::F64);
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
        assert_eq!(<i64 as Element>::DTYPE, DType::I64);
        assert_eq!(<i8 as Element>::DTYPE, DType::I8);
        assert_eq!(<u8 as Element>::DTYPE, DType::U8);
    }

    #[test]
    fn test_truthiness() {
        assert!(1.1f64.is_nonzero());
        assert!(f32::NAN.is_nonzero());
        assert!(f64::NEG_INFINITY.is_nonzero());
        assert!(!0.0f32.is_nonzero());
        assert!(!(-0.0f64).is_nonzero());
        assert!((-3i16).is_nonzero());
        assert!(!0u8.is_nonzero());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(f32::from_bool(true), 1.0);
        assert_eq!(f64::from_bool(false), 0.0);
        assert_eq!(i64::from_bool(true), 1);
        assert_eq!(u8::from_bool(false), 0);
    }
}
