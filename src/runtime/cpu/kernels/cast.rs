//! Cast kernel: element-wise dtype conversion between storages
//!
//! Every (source, destination) pair is handled by one of four paths:
//! - Bool → Bool: byte copy
//! - Bool → numeric: `true` → 1, `false` → 0
//! - numeric → Bool: nonzero (including NaN) → `true`
//! - numeric → numeric: [`CastFrom`], dispatched over both dtypes
//!
//! Performance characteristics:
//! - Parallelization threshold: configurable, 4096 elements by default
//! - Memory bandwidth bound (one read and one write per element)

use crate::dispatch_dtype;
use crate::dtype::{CastFrom, DType, Element};
use crate::error::{Error, Result};
use crate::tensor::Storage;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Elements per Rayon task
#[cfg(feature = "rayon")]
const CHUNK_SIZE: usize = 4096;

/// Convert the first `len` elements of `src` into the first `len` elements of
/// `dst`, each to `dst`'s dtype.
///
/// Elements of `dst` past `len` are left as they are.
///
/// # Errors
///
/// - `InvalidArgument` if either storage holds fewer than `len` elements
/// - `FeatureRequired` if either dtype needs the `f16` feature
pub fn cast_kernel(
    src: &Storage,
    dst: &mut Storage,
    len: usize,
    parallel_threshold: usize,
) -> Result<()> {
    if src.len() < len || dst.len() < len {
        return Err(Error::invalid_argument(
            "len",
            format!(
                "cannot cast {} elements from storage of {} into storage of {}",
                len,
                src.len(),
                dst.len()
            ),
        ));
    }

    let src_dtype = src.dtype();
    let dst_dtype = dst.dtype();

    match (src_dtype, dst_dtype) {
        (DType::Bool, DType::Bool) => {
            let input = &src.as_slice::<u8>()?[..len];
            dst.as_mut_slice::<u8>()?[..len].copy_from_slice(input);
        }
        (DType::Bool, _) => {
            dispatch_dtype!(dst_dtype, D => {
                from_bool::<D>(src, dst, len, parallel_threshold)?;
            }, "cast");
        }
        (_, DType::Bool) => {
            dispatch_dtype!(src_dtype, S => {
                to_bool::<S>(src, dst, len, parallel_threshold)?;
            }, "cast");
        }
        _ => {
            dispatch_dtype!(src_dtype, S => {
                dispatch_dtype!(dst_dtype, D => {
                    convert::<S, D>(src, dst, len, parallel_threshold)?;
                }, "cast");
            }, "cast");
        }
    }

    Ok(())
}

fn convert<S, D>(src: &Storage, dst: &mut Storage, len: usize, threshold: usize) -> Result<()>
where
    S: Element,
    D: Element + CastFrom<S>,
{
    let input = &src.as_slice::<S>()?[..len];
    let output = &mut dst.as_mut_slice::<D>()?[..len];
    map_elements(input, output, threshold, <D as CastFrom<S>>::cast_from);
    Ok(())
}

fn from_bool<D: Element>(src: &Storage, dst: &mut Storage, len: usize, threshold: usize) -> Result<()> {
    let input = &src.as_slice::<u8>()?[..len];
    let output = &mut dst.as_mut_slice::<D>()?[..len];
    map_elements(input, output, threshold, |b| D::from_bool(b != 0));
    Ok(())
}

fn to_bool<S: Element>(src: &Storage, dst: &mut Storage, len: usize, threshold: usize) -> Result<()> {
    let input = &src.as_slice::<S>()?[..len];
    let output = &mut dst.as_mut_slice::<u8>()?[..len];
    map_elements(input, output, threshold, |v: S| u8::from(v.is_nonzero()));
    Ok(())
}

/// Write `f(input[i])` to `output[i]` for every index
///
/// Runs on the Rayon pool once the slice reaches `threshold` elements.
#[inline]
#[cfg_attr(not(feature = "rayon"), allow(unused_variables))]
fn map_elements<S, D, F>(input: &[S], output: &mut [D], threshold: usize, f: F)
where
    S: Copy + Sync,
    D: Send,
    F: Fn(S) -> D + Sync,
{
    debug_assert_eq!(input.len(), output.len());

    #[cfg(feature = "rayon")]
    if output.len() >= threshold {
        output
            .par_chunks_mut(CHUNK_SIZE)
            .zip(input.par_chunks(CHUNK_SIZE))
            .for_each(|(out_chunk, in_chunk)| {
                for (o, &i) in out_chunk.iter_mut().zip(in_chunk) {
                    *o = f(i);
                }
            });
        return;
    }

    // Serial fallback for small tensors
    for (o, &i) in output.iter_mut().zip(input) {
        *o = f(i);
    }
}
