//! Relaxation sweeps for the discrete Laplace equation.
//!
//! This module defines the `Relaxation` trait and the two classical schemes
//! used for inpainting: synchronous Jacobi and in-place SOR. Both blend the
//! old value with the 4-neighbor average, `u ← (1-ω)·u + ω·avg`, on masked
//! cells only.
//!
//! The two schemes treat the image border differently. Jacobi reads
//! neighbors with periodic wrap-around, so border cells are updated like any
//! other masked cell. SOR only visits the interior and never wraps, so the
//! border acts as fixed data even where it is masked.

use faer::Mat;

use crate::error::InpaintError;
use crate::grid::Mask;

/// One relaxation sweep over the masked cells of a grid.
pub trait Relaxation<T> {
    /// Update `u` in place by one sweep. Fails if `mask` does not match `u`.
    fn sweep(&self, u: &mut Mat<T>, mask: &Mask) -> Result<(), InpaintError>;
    /// Relaxation factor ω.
    fn omega(&self) -> T;
}

pub mod averager;
pub mod jacobi;
pub mod sor;

pub use averager::{masked_residual_norm, neighbor_average};
pub use jacobi::{Jacobi, jacobi_step};
pub use sor::{Sor, sor_sweep};
