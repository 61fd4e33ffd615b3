//! Inpainting solver interfaces.
//!
//! A solver repeats a [`Relaxation`] sweep on a private copy of the image
//! until the Euclidean norm of the masked update drops strictly below the
//! tolerance, or the iteration cap is reached. Hitting the cap is a normal
//! return: check [`SolveStats::converged`] or compare `iterations` with the cap.

use faer::Mat;
use num_traits::Float;
use tracing::{debug, trace};

use crate::core::traits::MaskedNorm;
use crate::core::wrappers::ensure_same_shape;
use crate::error::InpaintError;
use crate::grid::Mask;
use crate::relaxation::Relaxation;
use crate::utils::convergence::{Convergence, SolveStats};

/// Output of a solve: the filled-in image and iteration stats.
#[derive(Clone, Debug)]
pub struct Inpainted<T> {
    pub image: Mat<T>,
    pub stats: SolveStats<T>,
}

/// Common interface for the relaxation-based inpainting solvers.
pub trait Inpainter<T> {
    type Error;
    /// Estimate the masked cells of `image`. The caller's image is not modified.
    fn inpaint(&mut self, image: &Mat<T>, mask: &Mask) -> Result<Inpainted<T>, Self::Error>;
}

/// Shared sweep loop for every relaxation scheme.
///
/// `image` and `mask` must already agree in shape.
pub(crate) fn relax_until_converged<T, R>(
    relax: &R,
    conv: &Convergence<T>,
    image: &Mat<T>,
    mask: &Mask,
) -> Result<Inpainted<T>, InpaintError>
where
    T: Float + std::fmt::Debug,
    R: Relaxation<T>,
{
    ensure_same_shape(image, mask)?;
    crate::config::validate_omega(relax.omega())?;
    debug!(
        nrows = image.nrows(),
        ncols = image.ncols(),
        unknowns = mask.count(),
        omega = ?relax.omega(),
        tol = ?conv.tol,
        max_iters = conv.max_iters,
        "starting relaxation"
    );

    let mut u = image.clone();
    let mut stats = conv.idle();
    for it in 1..=conv.max_iters {
        let prev = u.clone();
        relax.sweep(&mut u, mask)?;
        let diff = u.masked_diff_norm(&prev, mask)?;
        trace!(iteration = it, diff = ?diff, "sweep");
        let (stop, s) = conv.check(diff, it);
        stats = s;
        if stop {
            break;
        }
    }

    if stats.converged {
        debug!(iterations = stats.iterations, "converged");
    } else {
        debug!(iterations = stats.iterations, final_diff = ?stats.final_diff, "iteration cap reached");
    }
    Ok(Inpainted { image: u, stats })
}

pub mod jacobi;
pub use jacobi::{JacobiInpainter, inpaint_jacobi};

pub mod sor;
pub use sor::{SorInpainter, inpaint_sor};

pub mod omega;
pub use omega::{OmegaChoice, OmegaSearch, OmegaTrial};
