//! Argument checks that run before a copy touches any data

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::tensor::{MemoryFormat, Tensor};

/// Accept only the contiguous memory format.
///
/// `None` means the caller did not ask for a layout, which is treated as the
/// implicit contiguous request. Any other tag, known or not, is rejected.
pub fn check_memory_format(memory_format: Option<MemoryFormat>) -> Result<()> {
    match memory_format {
        None => Ok(()),
        Some(format) if format == MemoryFormat::CONTIGUOUS => Ok(()),
        Some(format) => {
            let reason = if format.is_known() {
                format!("memory format '{}' is not supported, only contiguous", format)
            } else {
                format!("unrecognized memory format tag {}", format.raw())
            };
            log::debug!("rejecting memory_format {}: {}", format, reason);
            Err(Error::invalid_argument("memory_format", reason))
        }
    }
}

/// Accept only blocking (synchronous) execution.
pub fn check_blocking(non_blocking: bool) -> Result<()> {
    if non_blocking {
        log::debug!("rejecting non_blocking=true");
        return Err(Error::invalid_argument(
            "non_blocking",
            "only blocking data transfer is supported",
        ));
    }
    Ok(())
}

/// Require a row-major layout starting at offset 0.
pub fn check_contiguous(tensor: &Tensor, arg: &'static str) -> Result<()> {
    if !tensor.is_contiguous() {
        log::debug!("rejecting non-contiguous {}: {:?}", arg, tensor.layout());
        return Err(Error::NotContiguous { arg });
    }
    Ok(())
}

/// Require that this build can store and cast `dtype`.
pub fn check_dtype_available(dtype: DType) -> Result<()> {
    match dtype.required_feature() {
        Some(feature) if !dtype.is_available() => {
            log::debug!("rejecting dtype {}: needs feature '{}'", dtype, feature);
            Err(Error::FeatureRequired { dtype, feature })
        }
        _ => Ok(()),
    }
}

/// Every precondition of `to_copy_out`, in order.
///
/// Runs before shape reconciliation; on failure neither tensor has been read
/// or written.
pub fn validate_to_copy_args(
    src: &Tensor,
    non_blocking: bool,
    memory_format: Option<MemoryFormat>,
    out: &Tensor,
) -> Result<()> {
    check_memory_format(memory_format)?;
    check_blocking(non_blocking)?;
    check_contiguous(src, "self")?;
    check_contiguous(out, "out")?;
    check_dtype_available(src.dtype())?;
    check_dtype_available(out.dtype())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::tensor::{Layout, Storage};

    #[test]
    fn test_memory_format() {
        assert!(check_memory_format(None).is_ok());
        assert!(check_memory_format(Some(MemoryFormat::CONTIGUOUS)).is_ok());

        let err = check_memory_format(Some(MemoryFormat::PRESERVE)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = check_memory_format(Some(MemoryFormat::from_raw(55))).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                arg: "memory_format",
                ..
            }
        ));
    }

    #[test]
    fn test_blocking() {
        assert!(check_blocking(false).is_ok());
        assert!(matches!(
            check_blocking(true),
            Err(Error::InvalidArgument {
                arg: "non_blocking",
                ..
            })
        ));
    }

    #[test]
    fn test_contiguous() {
        let t = Tensor::zeros(&[2, 3], DType::F32);
        assert!(check_contiguous(&t, "out").is_ok());

        let storage = Storage::new(6, DType::F32);
        let layout = Layout::contiguous(&[2, 3]).transpose(0, 1).unwrap();
        let t = Tensor::from_parts(storage, layout).unwrap();
        assert_eq!(
            check_contiguous(&t, "self").unwrap_err(),
            Error::NotContiguous { arg: "self" }
        );
    }

    #[test]
    fn test_dtype_available() {
        assert!(check_dtype_available(DType::F32).is_ok());
        assert!(check_dtype_available(DType::Bool).is_ok());
        assert_eq!(
            check_dtype_available(DType::BF16).is_ok(),
            cfg!(feature = "f16")
        );
    }

    #[test]
    fn test_memory_format_checked_before_blocking() {
        let src = Tensor::zeros(&[2], DType::I32);
        let out = Tensor::zeros(&[2], DType::I32);
        let err =
            validate_to_copy_args(&src, true, Some(MemoryFormat::from_raw(55)), &out).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                arg: "memory_format",
                ..
            }
        ));
    }
}
