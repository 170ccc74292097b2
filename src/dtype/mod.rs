//! Data type system for tensorcast tensors
//!
//! This module provides the `DType` enum representing all supported element types,
//! the `Element` trait mapping Rust storage types onto it, and the per-element
//! cast matrix used by the cast kernels.

mod cast;
mod element;

pub use cast::{CastFrom, cast_scalar};
pub use element::Element;

use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Data types supported by tensorcast tensors
///
/// This enum represents the element type of a tensor at runtime. Kernels turn
/// it back into a concrete Rust type with [`dispatch_dtype!`](crate::dispatch_dtype).
///
/// # Discriminant Values (Serialization Stability)
///
/// The discriminant values are **stable**:
/// - Floats: 0-9 (F64=0, F32=1, F16=2, BF16=3)
/// - Signed ints: 10-19 (I64=10, I32=11, I16=12, I8=13)
/// - Unsigned ints: 20-29 (U8=23)
/// - Bool: 30
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    // Floating point types (0-9)
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
    /// 16-bit floating point (IEEE 754), requires the `f16` feature
    F16 = 2,
    /// 16-bit brain floating point, requires the `f16` feature
    BF16 = 3,

    // Signed integer types
    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
    /// 16-bit signed integer
    I16 = 12,
    /// 8-bit signed integer
    I8 = 13,

    // Unsigned integer types
    /// 8-bit unsigned integer
    U8 = 23,

    /// Boolean type, stored as one byte (0 or 1)
    Bool = 30,
}

impl DType {
    /// Every dtype in the enumeration, feature-gated ones included
    pub const ALL: [DType; 10] = [
        DType::F64,
        DType::F32,
        DType::F16,
        DType::BF16,
        DType::I64,
        DType::I32,
        DType::I16,
        DType::I8,
        DType::U8,
        DType::Bool,
    ];

    /// Recover a dtype from its stable discriminant
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::F64),
            1 => Some(Self::F32),
            2 => Some(Self::F16),
            3 => Some(Self::BF16),
            10 => Some(Self::I64),
            11 => Some(Self::I32),
            12 => Some(Self::I16),
            13 => Some(Self::I8),
            23 => Some(Self::U8),
            30 => Some(Self::Bool),
            _ => None,
        }
    }

    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 | Self::I64 => 8,
            Self::F32 | Self::I32 => 4,
            Self::F16 | Self::BF16 | Self::I16 => 2,
            Self::I8 | Self::U8 | Self::Bool => 1,
        }
    }

    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32 | Self::F16 | Self::BF16)
    }

    /// Returns true if this is a signed integer type
    #[inline]
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::I64 | Self::I32 | Self::I16 | Self::I8)
    }

    /// Returns true if this is an unsigned integer type
    #[inline]
    pub const fn is_unsigned_int(self) -> bool {
        matches!(self, Self::U8)
    }

    /// Returns true if this is any integer type (signed or unsigned)
    #[inline]
    pub const fn is_int(self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    /// Returns true if this is a boolean type
    #[inline]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    /// The dtype whose Rust type backs this dtype's storage.
    ///
    /// Bool has no `Pod` representation, so its bytes are read and written as U8.
    #[inline]
    pub const fn storage_dtype(self) -> Self {
        match self {
            Self::Bool => Self::U8,
            other => other,
        }
    }

    /// Cargo feature this dtype needs, if any
    #[inline]
    pub const fn required_feature(self) -> Option<&'static str> {
        match self {
            Self::F16 | Self::BF16 => Some("f16"),
            _ => None,
        }
    }

    /// Returns true if this build can store and cast this dtype
    #[inline]
    pub const fn is_available(self) -> bool {
        match self.required_feature() {
            Some(_) => cfg!(feature = "f16"),
            None => true,
        }
    }

    /// Short name for display (e.g., "f32", "i64")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Set of dtypes for efficient membership testing
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DTypeSet {
    bits: u64,
}

impl DTypeSet {
    /// All floating point types
    pub const FLOATS: Self = Self {
        bits: (1 << DType::F64 as u8)
            | (1 << DType::F32 as u8)
            | (1 << DType::F16 as u8)
            | (1 << DType::BF16 as u8),
    };

    /// All integer types
    pub const INTS: Self = Self {
        bits: (1 << DType::I64 as u8)
            | (1 << DType::I32 as u8)
            | (1 << DType::I16 as u8)
            | (1 << DType::I8 as u8)
            | (1 << DType::U8 as u8),
    };

    /// All real types (floats + ints)
    pub const REAL: Self = Self {
        bits: Self::FLOATS.bits | Self::INTS.bits,
    };

    /// Every dtype, Bool included
    pub const ALL: Self = Self {
        bits: Self::REAL.bits | (1 << DType::Bool as u8),
    };

    /// Check if the set contains a dtype
    #[inline]
    pub const fn contains(self, dtype: DType) -> bool {
        self.bits & (1 << dtype as u8) != 0
    }

    /// Dtypes of this set that the current build can cast, in `DType::ALL` order
    pub fn available(self) -> Vec<DType> {
        DType::ALL
            .into_iter()
            .filter(|&d| self.contains(d) && d.is_available())
            .collect()
    }
}
