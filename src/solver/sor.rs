//! SOR inpainting solver.

use faer::Mat;
use num_traits::Float;

use crate::config::InpaintOptions;
use crate::error::InpaintError;
use crate::grid::Mask;
use crate::relaxation::Sor;
use crate::solver::{Inpainted, Inpainter, relax_until_converged};
use crate::utils::convergence::Convergence;

pub struct SorInpainter<T> {
    pub conv: Convergence<T>,
    pub relax: Sor<T>,
}

impl<T: Float> SorInpainter<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters }, relax: Sor::default() }
    }

    pub fn with_omega(mut self, omega: T) -> Self {
        self.relax.set_omega(omega);
        self
    }
}

impl<T: Float> From<&InpaintOptions<T>> for SorInpainter<T> {
    fn from(opts: &InpaintOptions<T>) -> Self {
        Self::new(opts.tol, opts.max_iter).with_omega(opts.omega)
    }
}

impl<T> Inpainter<T> for SorInpainter<T>
where
    T: Float + std::fmt::Debug,
{
    type Error = InpaintError;

    fn inpaint(&mut self, image: &Mat<T>, mask: &Mask) -> Result<Inpainted<T>, InpaintError> {
        relax_until_converged(&self.relax, &self.conv, image, mask)
    }
}

/// Inpaint `image` with SOR sweeps using `opts`.
pub fn inpaint_sor<T>(
    image: &Mat<T>,
    mask: &Mask,
    opts: &InpaintOptions<T>,
) -> Result<Inpainted<T>, InpaintError>
where
    T: Float + std::fmt::Debug,
{
    SorInpainter::from(opts).inpaint(image, mask)
}
