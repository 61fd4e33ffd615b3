use std::fmt;

use faer::Mat;
use num_traits::Float;

use crate::core::wrappers::ensure_same_shape;
use crate::error::InpaintError;
use crate::grid::Mask;
use crate::relaxation::Relaxation;

/// One in-place SOR sweep.
///
/// Visits the interior cells `(1, 1)..=(rows-2, cols-2)` in row-major order.
/// Each masked cell is relaxed towards the average of its four neighbors as
/// they currently stand, so cells later in the sweep already see this
/// sweep's updates (Gauss–Seidel ordering). Border cells are never written
/// and neighbors never wrap. Grids smaller than 3×3 have no interior.
///
/// # Errors
/// `InvalidShape` if `mask` does not match `u`; `u` is then left untouched.
pub fn sor_sweep<T: Float>(u: &mut Mat<T>, mask: &Mask, omega: T) -> Result<(), InpaintError> {
    ensure_same_shape(u, mask)?;
    let (m, n) = (u.nrows(), u.ncols());
    if m < 3 || n < 3 {
        return Ok(());
    }
    let quarter = (T::one() + T::one() + T::one() + T::one()).recip();
    let keep = T::one() - omega;
    for i in 1..m - 1 {
        for j in 1..n - 1 {
            if !mask.get(i, j) {
                continue;
            }
            let avg = (u[(i + 1, j)] + u[(i - 1, j)] + u[(i, j + 1)] + u[(i, j - 1)]) * quarter;
            u[(i, j)] = keep * u[(i, j)] + omega * avg;
        }
    }
    Ok(())
}

/// Successive over-relaxation with factor ω; ω = 1 is Gauss–Seidel.
#[derive(Clone, Copy, Debug)]
pub struct Sor<T> {
    pub omega: T,
}

impl<T: Float> Sor<T> {
    pub fn new(omega: T) -> Self {
        Self { omega }
    }
    pub fn set_omega(&mut self, omega: T) { self.omega = omega; }
}

impl<T: Float> Default for Sor<T> {
    fn default() -> Self {
        Self::new(T::one())
    }
}

impl<T: Float + fmt::Display> fmt::Display for Sor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SOR(omega={})", self.omega)
    }
}

impl<T: Float> Relaxation<T> for Sor<T> {
    fn sweep(&self, u: &mut Mat<T>, mask: &Mask) -> Result<(), InpaintError> {
        sor_sweep(u, mask, self.omega)
    }

    fn omega(&self) -> T {
        self.omega
    }
}
