//! Per-element conversion between storage types
//!
//! Numeric conversions follow Rust's `as` semantics: float→int truncates toward
//! zero, integer width changes sign- or zero-extend or wrap, and float↔float
//! rounds to nearest while keeping NaN and ±infinity. Values that are not
//! representable in the destination type still produce *some* value (Rust's
//! saturating float→int casts never fault), but which one is not part of the
//! contract.
//!
//! Bool is not covered here; kernels handle it through
//! [`Element::is_nonzero`](super::Element::is_nonzero) and
//! [`Element::from_bool`](super::Element::from_bool).

/// Conversion from a source element type into `Self`.
pub trait CastFrom<S>: Sized {
    /// Convert one element
    fn cast_from(value: S) -> Self;
}

/// Convert one element from `S` to `D`.
#[inline]
pub fn cast_scalar<S, D: CastFrom<S>>(value: S) -> D {
    D::cast_from(value)
}

macro_rules! impl_cast_primitive {
    (@from $src:ty => $($dst:ty),*) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }
            }
        )*
    };
    ($($src:ty),* $(,)?) => {
        $(
            impl_cast_primitive!(@from $src => i64, i32, i16, i8, u8, f32, f64);
        )*
    };
}

impl_cast_primitive!(i64, i32, i16, i8, u8, f32, f64);

#[cfg(feature = "f16")]
mod half_casts {
    use super::CastFrom;
    use half::{bf16, f16};

    macro_rules! impl_cast_half {
        ($half:ty => $($prim:ty),*) => {
            $(
                impl CastFrom<$half> for $prim {
                    #[inline]
                    fn cast_from(value: $half) -> Self {
                        value.to_f64() as $prim
                    }
                }

                impl CastFrom<$prim> for $half {
                    #[inline]
                    #[allow(clippy::unnecessary_cast)]
                    fn cast_from(value: $prim) -> Self {
                        <$half>::from_f64(value as f64)
                    }
                }
            )*

            impl CastFrom<$half> for $half {
                #[inline]
                fn cast_from(value: $half) -> Self {
                    value
                }
            }
        };
    }

    impl_cast_half!(f16 => i64, i32, i16, i8, u8, f32, f64);
    impl_cast_half!(bf16 => i64, i32, i16, i8, u8, f32, f64);

    impl CastFrom<f16> for bf16 {
        #[inline]
        fn cast_from(value: f16) -> Self {
            bf16::from_f32(value.to_f32())
        }
    }

    impl CastFrom<bf16> for f16 {
        #[inline]
        fn cast_from(value: bf16) -> Self {
            f16::from_f32(value.to_f32())
        }
    }
}
