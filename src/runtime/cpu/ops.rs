//! TypeConversionOps implementation for CPU runtime
//!
//! This module wires the argument checks, output reconciliation and the cast
//! kernel into the operation trait.

use super::{CpuClient, kernels};
use crate::error::Result;
use crate::ops::{TypeConversionOps, resize_output, validate_to_copy_args};
use crate::tensor::{MemoryFormat, Tensor};

impl TypeConversionOps for CpuClient {
    fn to_copy_out<'o>(
        &self,
        src: &Tensor,
        non_blocking: bool,
        memory_format: Option<MemoryFormat>,
        out: &'o mut Tensor,
    ) -> Result<&'o mut Tensor> {
        log::trace!(
            "to_copy_out: {} {:?} -> {} {:?} ({})",
            src.dtype(),
            src.shape(),
            out.dtype(),
            out.shape(),
            out.dynamism()
        );

        validate_to_copy_args(src, non_blocking, memory_format, out)?;
        resize_output(out, src.shape(), self.features())?;

        let numel = src.numel();
        kernels::cast_kernel(
            src.storage(),
            out.storage_mut(),
            numel,
            self.parallel_threshold(),
        )?;

        log::trace!("to_copy_out: wrote {} elements into {}", numel, out.id());
        Ok(out)
    }
}
