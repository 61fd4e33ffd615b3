//! Core grid traits for laplace-inpaint.

use crate::error::InpaintError;
use crate::grid::Mask;

/// Uniform shape query for 2D grids and masks.
pub trait GridShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// `(nrows, ncols)`.
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Norms restricted to the cells selected by a mask.
pub trait MaskedNorm {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute ‖(self - other)|ₘ‖₂, the Euclidean norm of the difference over masked cells.
    fn masked_diff_norm(&self, other: &Self, mask: &Mask) -> Result<Self::Scalar, InpaintError>;
    /// Compute ‖self|ₘ‖₂.
    fn masked_norm(&self, mask: &Mask) -> Result<Self::Scalar, InpaintError>;
}
