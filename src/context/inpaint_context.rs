//! Factory for relaxation inpainting solvers.
//!
//! `InpaintContext` pairs a [`SolverKind`] with [`InpaintOptions`] and
//! dispatches to the matching solver, so callers can switch schemes without
//! changing the surrounding code.
//!
//! # Usage
//!
//! 1. Construct an `InpaintContext` with the solver kind and options.
//! 2. Call `solve` with the damaged image and its mask.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems. SIAM, §4.1.

use faer::Mat;
use num_traits::Float;

use crate::config::InpaintOptions;
use crate::error::InpaintError;
use crate::grid::Mask;
use crate::solver::{Inpainted, Inpainter, JacobiInpainter, SorInpainter};

/// Enum representing the available relaxation schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    /// Synchronous Jacobi sweeps with wrap-around neighbors
    Jacobi,
    /// In-place successive over-relaxation over the interior
    Sor,
}

impl SolverKind {
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Jacobi => "jacobi",
            SolverKind::Sor => "sor",
        }
    }
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SolverKind {
    type Err = InpaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jacobi" => Ok(SolverKind::Jacobi),
            "sor" | "gauss-seidel" | "gs" => Ok(SolverKind::Sor),
            other => Err(InpaintError::InvalidParameter(format!("unknown solver kind {other:?}"))),
        }
    }
}

/// Context and configuration for an inpainting solve.
#[derive(Debug, Clone)]
pub struct InpaintContext<T> {
    /// The relaxation scheme to use
    pub kind: SolverKind,
    /// Tolerance, iteration cap and relaxation factor
    pub options: InpaintOptions<T>,
}

impl<T> InpaintContext<T>
where
    T: Float + std::fmt::Debug,
{
    pub fn new(kind: SolverKind, options: InpaintOptions<T>) -> Self {
        Self { kind, options }
    }

    /// Solve with the configured scheme.
    ///
    /// # Returns
    /// * `Ok(Inpainted)` with the filled image and iteration stats
    /// * `Err(InpaintError)` on a shape mismatch or an invalid ω
    pub fn solve(&self, image: &Mat<T>, mask: &Mask) -> Result<Inpainted<T>, InpaintError> {
        match self.kind {
            SolverKind::Jacobi => JacobiInpainter::from(&self.options).inpaint(image, mask),
            SolverKind::Sor => SorInpainter::from(&self.options).inpaint(image, mask),
        }
    }
}
