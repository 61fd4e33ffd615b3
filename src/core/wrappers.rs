//! Wrappers for faer dense matrix types used as image grids.
//!
//! This module implements the core grid traits for `faer::Mat`, so that a
//! plain `Mat<T>` can be handed to every stepper and solver in the crate.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{GridShape, MaskedNorm};
use crate::error::InpaintError;
use crate::grid::Mask;
use faer::Mat;
use num_traits::Float;

/// A 2D grid of pixel intensities.
pub type Grid<T> = Mat<T>;

impl<T> GridShape for Mat<T> {
    fn nrows(&self) -> usize {
        Mat::nrows(self)
    }
    fn ncols(&self) -> usize {
        Mat::ncols(self)
    }
}

/// Masked norms for `faer::Mat`.
///
/// Both grids and the mask must share a shape.
impl<T: Float> MaskedNorm for Mat<T> {
    type Scalar = T;

    fn masked_diff_norm(&self, other: &Self, mask: &Mask) -> Result<T, InpaintError> {
        ensure_same_shape(self, mask)?;
        ensure_same_shape(other, mask)?;
        Ok(mask
            .iter_masked()
            .map(|(i, j)| {
                let d = self[(i, j)] - other[(i, j)];
                d * d
            })
            .fold(T::zero(), |acc, v| acc + v)
            .sqrt())
    }

    fn masked_norm(&self, mask: &Mask) -> Result<T, InpaintError> {
        ensure_same_shape(self, mask)?;
        Ok(mask
            .iter_masked()
            .map(|(i, j)| self[(i, j)] * self[(i, j)])
            .fold(T::zero(), |acc, v| acc + v)
            .sqrt())
    }
}

/// Check that `mask` has the same shape as `grid`.
pub fn ensure_same_shape<T>(grid: &Mat<T>, mask: &Mask) -> Result<(), InpaintError> {
    let expected = GridShape::shape(grid);
    let found = mask.shape();
    if expected != found {
        return Err(InpaintError::InvalidShape { expected, found });
    }
    Ok(())
}
