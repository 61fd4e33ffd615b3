//! laplace-inpaint: Laplace-equation image inpainting over Faer
//!
//! This crate fills the masked (unknown) pixels of a 2D image by relaxing the
//! discrete Laplace equation with Jacobi or successive over-relaxation (SOR)
//! sweeps, and searches for the SOR relaxation factor that converges fastest.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod grid;
pub mod relaxation;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use self::core::*;
pub use error::*;
pub use grid::*;
pub use relaxation::{
    Jacobi, Relaxation, Sor, jacobi_step, masked_residual_norm, neighbor_average, sor_sweep,
};
pub use solver::*;
pub use utils::*;
