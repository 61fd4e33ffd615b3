//! Convergence tracking & tolerance checks for relaxation solvers.

/// Stopping criteria: absolute tolerance on the masked update norm, and an iteration cap.
#[derive(Clone, Copy, Debug)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    /// Sweeps performed; equals `max_iters` when the cap was hit.
    pub iterations: usize,
    /// Norm of the last masked update.
    pub final_diff: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// Returns (should_stop, stats) given the update norm `diff` of sweep `i` (1-based).
    ///
    /// The comparison is strict, so a non-positive tolerance never stops early.
    pub fn check(&self, diff: T, i: usize) -> (bool, SolveStats<T>) {
        let converged = diff < self.tol;
        (
            converged || i >= self.max_iters,
            SolveStats {
                iterations: i,
                final_diff: diff,
                converged,
            },
        )
    }

    /// Stats for a solve that ran no sweeps at all.
    pub fn idle(&self) -> SolveStats<T> {
        SolveStats { iterations: 0, final_diff: T::zero(), converged: false }
    }
}
