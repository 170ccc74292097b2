//! Type conversion operations trait.

use crate::dtype::DType;
use crate::error::Result;
use crate::tensor::{MemoryFormat, Tensor};

/// Type conversion operations
pub trait TypeConversionOps {
    /// Copy `src` into `out`, converting every element to `out`'s dtype.
    ///
    /// This is the out-variant copy: the caller owns `out`, and the returned
    /// reference is `out` itself.
    ///
    /// # Conversions
    ///
    /// - **Widening** (lossless): I8→I16→I32→I64, U8→I16, F16→F32→F64
    /// - **Narrowing** (may lose precision): F64→F32→F16, I64→I32→I16→I8
    /// - **Float→Int**: Truncates toward zero
    /// - **Float→Float**: NaN stays NaN, ±infinity keeps its sign
    /// - **To Bool**: nonzero (including NaN) → true, zero → false
    /// - **From Bool**: true → 1, false → 0
    ///
    /// Converting a value the destination cannot represent (e.g. NaN or 300.0
    /// to I8) succeeds with an unspecified element value.
    ///
    /// # Arguments
    ///
    /// * `src` - Input tensor, contiguous
    /// * `non_blocking` - Must be `false`
    /// * `memory_format` - `None` or [`MemoryFormat::CONTIGUOUS`]
    /// * `out` - Output tensor, contiguous; its shape is reconciled with
    ///   `src`'s according to its [`ShapeDynamism`](crate::tensor::ShapeDynamism)
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for a non-contiguous memory format or `non_blocking`
    /// - `NotContiguous` if either tensor has a strided layout
    /// - `FeatureRequired` for F16/BF16 without the `f16` feature
    /// - `ShapeMismatch` / `ResizeNotSupported` if `out` cannot take `src`'s shape
    ///
    /// On any error no element of `out` has been written.
    fn to_copy_out<'o>(
        &self,
        src: &Tensor,
        non_blocking: bool,
        memory_format: Option<MemoryFormat>,
        out: &'o mut Tensor,
    ) -> Result<&'o mut Tensor>;

    /// Cast tensor to a different data type.
    ///
    /// Allocates a static output of `a`'s shape and runs [`Self::to_copy_out`]
    /// on it. Casting to `a`'s own dtype still returns a fresh copy.
    fn cast(&self, a: &Tensor, dtype: DType) -> Result<Tensor> {
        let mut out = Tensor::zeros_like(a, dtype);
        self.to_copy_out(a, false, None, &mut out)?;
        Ok(out)
    }
}
