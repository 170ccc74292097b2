//! Output shape reconciliation
//!
//! Out-variant operations receive their output tensor from the caller. Before
//! writing, the output's shape is made to match the shape the operation
//! produces, as far as the output's [`ShapeDynamism`] allows:
//!
//! | Policy           | Same shape | Different shape                                  |
//! |------------------|------------|--------------------------------------------------|
//! | `Static`         | ok         | `ShapeMismatch`                                  |
//! | `DynamicBound`   | ok         | narrow in place if every extent fits the bound   |
//! | `DynamicUnbound` | ok         | reallocate if the runtime supports output resize |

use crate::error::{Error, Result};
use crate::runtime::SupportedFeatures;
use crate::tensor::{Shape, ShapeDynamism, Tensor};

/// Make `out`'s shape equal to `required`, or fail.
///
/// On success the output's logical shape is `required`. A bound output keeps
/// its storage and bound; an unbound output is reallocated to exactly
/// `required`. On failure the output's contents are untouched.
pub fn resize_output(
    out: &mut Tensor,
    required: &[usize],
    features: &SupportedFeatures,
) -> Result<()> {
    if out.shape() == required {
        return Ok(());
    }

    match out.dynamism() {
        ShapeDynamism::Static => {
            log::debug!(
                "static output {:?} cannot take shape {:?}",
                out.shape(),
                required
            );
            Err(Error::shape_mismatch(required, out.shape()))
        }
        ShapeDynamism::DynamicBound => {
            if !Shape::from(required).fits_within(out.bound_shape()) {
                log::debug!(
                    "shape {:?} exceeds output bound {:?}",
                    required,
                    out.bound_shape()
                );
                return Err(Error::shape_mismatch(required, out.bound_shape()));
            }
            log::trace!(
                "narrowing bound output {:?} -> {:?} (bound {:?})",
                out.shape(),
                required,
                out.bound_shape()
            );
            out.set_logical_shape(required);
            Ok(())
        }
        ShapeDynamism::DynamicUnbound => {
            if !features.output_resize {
                log::debug!(
                    "output resize unsupported: {:?} -> {:?}",
                    out.shape(),
                    required
                );
                return Err(Error::ResizeNotSupported {
                    from: out.shape().to_vec(),
                    to: required.to_vec(),
                });
            }
            log::trace!("resizing unbound output {:?} -> {:?}", out.shape(), required);
            out.reallocate(required);
            Ok(())
        }
    }
}
