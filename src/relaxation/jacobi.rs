// Jacobi relaxation

use std::fmt;

use faer::Mat;
use num_traits::Float;

use crate::core::wrappers::ensure_same_shape;
use crate::error::InpaintError;
use crate::grid::Mask;
use crate::relaxation::{Relaxation, neighbor_average};

/// One synchronous Jacobi step.
///
/// Every masked cell is updated from the same prior iterate `u`, using the
/// wrap-around neighbor average; unmasked cells are copied. `u` is untouched.
///
/// # Errors
/// `InvalidShape` if `mask` does not match `u`.
pub fn jacobi_step<T: Float>(u: &Mat<T>, mask: &Mask, omega: T) -> Result<Mat<T>, InpaintError> {
    ensure_same_shape(u, mask)?;
    let avg = neighbor_average(u);
    let keep = T::one() - omega;
    Ok(Mat::from_fn(u.nrows(), u.ncols(), |i, j| {
        if mask.get(i, j) {
            keep * u[(i, j)] + omega * avg[(i, j)]
        } else {
            u[(i, j)]
        }
    }))
}

/// Weighted Jacobi relaxation: u ← (1-ω)·u + ω·avg(u).
#[derive(Clone, Copy, Debug)]
pub struct Jacobi<T> {
    pub omega: T,
}

impl<T: Float> Jacobi<T> {
    pub fn new(omega: T) -> Self {
        Self { omega }
    }
}

impl<T: Float> Default for Jacobi<T> {
    fn default() -> Self {
        Self::new(T::one())
    }
}

impl<T: Float + fmt::Display> fmt::Display for Jacobi<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jacobi(omega={})", self.omega)
    }
}

impl<T: Float> Relaxation<T> for Jacobi<T> {
    fn sweep(&self, u: &mut Mat<T>, mask: &Mask) -> Result<(), InpaintError> {
        *u = jacobi_step(u, mask, self.omega)?;
        Ok(())
    }

    fn omega(&self) -> T {
        self.omega
    }
}
