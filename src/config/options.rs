//! API options for the inpainting solvers.
//!
//! This module provides the `InpaintOptions` struct, which bundles the
//! stopping criteria and relaxation factor shared by the Jacobi and SOR
//! solvers. Defaults follow the classic demo settings: tolerance 1e-10,
//! 1000 sweeps, ω = 1.

use num_traits::Float;

use crate::error::InpaintError;

/// Solver parameters.
#[derive(Clone, Copy, Debug)]
pub struct InpaintOptions<T> {
    /// Absolute tolerance on the norm of the masked update between sweeps
    pub tol: T,

    /// Maximum number of sweeps
    pub max_iter: usize,

    /// Relaxation factor ω, valid in (0, 2)
    pub omega: T,
}

impl<T: Float> InpaintOptions<T> {
    pub fn new(tol: T, max_iter: usize) -> Self {
        Self { tol, max_iter, omega: T::one() }
    }

    pub fn with_omega(mut self, omega: T) -> Self {
        self.omega = omega;
        self
    }
}

impl<T: Float> Default for InpaintOptions<T> {
    fn default() -> Self {
        let tol = T::from(1e-10).unwrap_or_else(T::epsilon);
        Self::new(tol, 1000)
    }
}

/// Reject a relaxation factor outside the open interval (0, 2).
///
/// Outside that range neither scheme converges on the Laplace problem, so
/// it is treated as a caller error rather than a slow run.
pub fn validate_omega<T: Float + std::fmt::Debug>(omega: T) -> Result<(), InpaintError> {
    let two = T::one() + T::one();
    if omega.is_finite() && omega > T::zero() && omega < two {
        Ok(())
    } else {
        Err(InpaintError::InvalidParameter(format!(
            "omega must lie in (0, 2), got {omega:?}"
        )))
    }
}
