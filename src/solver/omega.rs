//! Brute-force search for the SOR relaxation factor.
//!
//! Each candidate ω runs a full SOR solve from the untouched image (no warm
//! start). The winner is the first candidate whose iteration count is
//! strictly below the best seen so far, starting from the iteration cap, so
//! ties go to the earlier candidate and a sweep in which nothing beats the
//! cap reports [`OmegaChoice::NoImprovement`].

use faer::Mat;
use num_traits::{Float, FromPrimitive};
use tracing::{debug, info};

use crate::config::validate_omega;
use crate::core::wrappers::ensure_same_shape;
use crate::error::InpaintError;
use crate::grid::Mask;
use crate::solver::{Inpainter, SorInpainter};

/// Outcome of an omega search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OmegaChoice<T> {
    /// Fastest candidate and its iteration count.
    Best { omega: T, iterations: usize },
    /// No candidate converged in fewer than `iterations` (the cap) sweeps.
    NoImprovement { iterations: usize },
}

impl<T: Copy> OmegaChoice<T> {
    pub fn omega(&self) -> Option<T> {
        match *self {
            OmegaChoice::Best { omega, .. } => Some(omega),
            OmegaChoice::NoImprovement { .. } => None,
        }
    }

    pub fn iterations(&self) -> usize {
        match *self {
            OmegaChoice::Best { iterations, .. } | OmegaChoice::NoImprovement { iterations } => iterations,
        }
    }
}

/// Result of one SOR run during the sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OmegaTrial<T> {
    pub omega: T,
    pub iterations: usize,
    pub converged: bool,
}

/// Sweep configuration.
#[derive(Clone, Debug)]
pub struct OmegaSearch<T> {
    /// Candidates, tried in order.
    pub candidates: Vec<T>,
    /// Sweep cap for every trial; also the baseline to beat.
    pub max_iter: usize,
    pub tol: T,
}

impl<T: Float + FromPrimitive> OmegaSearch<T> {
    /// 1.00, 1.05, …, 1.95.
    pub fn default_candidates() -> Vec<T> {
        (0..20u8)
            .filter_map(|k| T::from_f64(1.0 + 0.05 * f64::from(k)))
            .collect()
    }
}

impl<T: Float + FromPrimitive> Default for OmegaSearch<T> {
    fn default() -> Self {
        Self {
            candidates: Self::default_candidates(),
            max_iter: 1000,
            tol: T::from_f64(1e-10).unwrap_or_else(T::epsilon),
        }
    }
}

impl<T> OmegaSearch<T>
where
    T: Float + std::fmt::Debug,
{
    pub fn new(candidates: Vec<T>, max_iter: usize, tol: T) -> Self {
        Self { candidates, max_iter, tol }
    }

    pub fn with_candidates(mut self, candidates: Vec<T>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Check the mask shape and every candidate before any solve runs.
    fn validate(&self, image: &Mat<T>, mask: &Mask) -> Result<(), InpaintError> {
        ensure_same_shape(image, mask)?;
        self.candidates.iter().try_for_each(|&omega| validate_omega(omega))
    }

    fn trial(&self, image: &Mat<T>, mask: &Mask, omega: T) -> Result<OmegaTrial<T>, InpaintError> {
        let mut solver = SorInpainter::new(self.tol, self.max_iter).with_omega(omega);
        let out = solver.inpaint(image, mask)?;
        debug!(omega = ?omega, iterations = out.stats.iterations, "omega trial");
        Ok(OmegaTrial { omega, iterations: out.stats.iterations, converged: out.stats.converged })
    }

    /// Run every candidate in order and report each trial.
    pub fn trials(&self, image: &Mat<T>, mask: &Mask) -> Result<Vec<OmegaTrial<T>>, InpaintError> {
        self.validate(image, mask)?;
        self.candidates
            .iter()
            .map(|&omega| self.trial(image, mask, omega))
            .collect()
    }

    /// Sequential search.
    ///
    /// # Errors
    /// `InvalidShape` if `mask` does not match `image`, `InvalidParameter`
    /// if any candidate lies outside (0, 2). Both are reported before the
    /// first trial runs.
    pub fn run(&self, image: &Mat<T>, mask: &Mask) -> Result<OmegaChoice<T>, InpaintError> {
        let trials = self.trials(image, mask)?;
        Ok(self.select(&trials))
    }

    /// Pick the first strictly fastest trial, in candidate order.
    pub fn select(&self, trials: &[OmegaTrial<T>]) -> OmegaChoice<T> {
        let mut best = OmegaChoice::NoImprovement { iterations: self.max_iter };
        for t in trials {
            if t.iterations < best.iterations() {
                best = OmegaChoice::Best { omega: t.omega, iterations: t.iterations };
            }
        }
        match best {
            OmegaChoice::Best { omega, iterations } => {
                info!(omega = ?omega, iterations, "omega search selected candidate")
            }
            OmegaChoice::NoImprovement { iterations } => {
                info!(iterations, candidates = trials.len(), "omega search found no candidate below the cap")
            }
        }
        best
    }
}

#[cfg(feature = "rayon")]
impl<T> OmegaSearch<T>
where
    T: Float + std::fmt::Debug + Send + Sync,
{
    /// Parallel search over the rayon pool.
    ///
    /// Trials run concurrently but are reduced in candidate order, so the
    /// choice is identical to [`OmegaSearch::run`].
    pub fn run_par(&self, image: &Mat<T>, mask: &Mask) -> Result<OmegaChoice<T>, InpaintError> {
        use rayon::prelude::*;

        self.validate(image, mask)?;
        let trials = self
            .candidates
            .par_iter()
            .map(|&omega| self.trial(image, mask, omega))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.select(&trials))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_candidates_match_classic_sweep() {
        let c = OmegaSearch::<f64>::default_candidates();
        assert_eq!(c.len(), 20);
        assert_eq!(c[0], 1.0);
        assert!((c[19] - 1.95).abs() < 1e-12);
        assert!(c.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        let search = OmegaSearch::new(vec![1.0, 1.2, 1.4], 100, 1e-10);
        let trials = [
            OmegaTrial { omega: 1.0, iterations: 40, converged: true },
            OmegaTrial { omega: 1.2, iterations: 30, converged: true },
            OmegaTrial { omega: 1.4, iterations: 30, converged: true },
        ];
        assert_eq!(search.select(&trials), OmegaChoice::Best { omega: 1.2, iterations: 30 });
    }

    #[test]
    fn nothing_below_the_cap_is_no_improvement() {
        let search = OmegaSearch::new(vec![1.0, 1.5], 100, 1e-10);
        let trials = [
            OmegaTrial { omega: 1.0, iterations: 100, converged: false },
            OmegaTrial { omega: 1.5, iterations: 100, converged: true },
        ];
        let choice = search.select(&trials);
        assert_eq!(choice, OmegaChoice::NoImprovement { iterations: 100 });
        assert_eq!(choice.omega(), None);
        assert_eq!(search.select(&[]), OmegaChoice::NoImprovement { iterations: 100 });
    }
}
