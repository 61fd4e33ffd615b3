//! Jacobi inpainting solver.

use faer::Mat;
use num_traits::Float;

use crate::config::InpaintOptions;
use crate::error::InpaintError;
use crate::grid::Mask;
use crate::relaxation::Jacobi;
use crate::solver::{Inpainted, Inpainter, relax_until_converged};
use crate::utils::convergence::Convergence;

pub struct JacobiInpainter<T> {
    pub conv: Convergence<T>,
    pub relax: Jacobi<T>,
}

impl<T: Float> JacobiInpainter<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters }, relax: Jacobi::default() }
    }

    pub fn with_omega(mut self, omega: T) -> Self {
        self.relax.omega = omega;
        self
    }
}

impl<T: Float> From<&InpaintOptions<T>> for JacobiInpainter<T> {
    fn from(opts: &InpaintOptions<T>) -> Self {
        Self::new(opts.tol, opts.max_iter).with_omega(opts.omega)
    }
}

impl<T> Inpainter<T> for JacobiInpainter<T>
where
    T: Float + std::fmt::Debug,
{
    type Error = InpaintError;

    fn inpaint(&mut self, image: &Mat<T>, mask: &Mask) -> Result<Inpainted<T>, InpaintError> {
        relax_until_converged(&self.relax, &self.conv, image, mask)
    }
}

/// Inpaint `image` with Jacobi sweeps using `opts`.
pub fn inpaint_jacobi<T>(
    image: &Mat<T>,
    mask: &Mask,
    opts: &InpaintOptions<T>,
) -> Result<Inpainted<T>, InpaintError>
where
    T: Float + std::fmt::Debug,
{
    JacobiInpainter::from(opts).inpaint(image, mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jacobi_fills_a_single_hole_with_the_neighbor_mean() {
        let image = Mat::from_fn(3, 3, |i, j| if (i, j) == (1, 1) { 0.0 } else { (i * 3 + j) as f64 });
        let mut mask = Mask::new(3, 3);
        mask.set(1, 1, true);
        let mut solver = JacobiInpainter::new(1e-12, 50);
        let out = solver.inpaint(&image, &mask).unwrap();
        // neighbors 1, 3, 5, 7
        assert!((out.image[(1, 1)] - 4.0).abs() < 1e-12);
        assert!(out.stats.converged);
        assert_eq!(out.stats.iterations, 2);
    }

    #[test]
    fn zero_cap_returns_input() {
        let image = Mat::from_fn(4, 4, |i, j| (i + j) as f64);
        let mask = Mask::full(4, 4);
        let mut solver = JacobiInpainter::new(1e-10, 0);
        let out = solver.inpaint(&image, &mask).unwrap();
        assert_eq!(out.stats.iterations, 0);
        assert!(!out.stats.converged);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(out.image[(i, j)], image[(i, j)]);
            }
        }
    }
}
