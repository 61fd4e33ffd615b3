//! Context module for laplace-inpaint.
//!
//! This module provides the context/factory type that selects a relaxation
//! scheme and carries its parameters.
//!
//! Modules:
//! - [`inpaint_context`]: Contains `InpaintContext` and the `SolverKind` selector.
//!
//! # Example
//! ```rust
//! use laplace_inpaint::{InpaintContext, InpaintOptions, Mask, SolverKind};
//! use faer::Mat;
//!
//! let image = Mat::from_fn(8, 8, |i, _| i as f64);
//! let mask = Mask::rect(8, 8, 3..5, 2..6);
//! let ctx = InpaintContext::new(SolverKind::Sor, InpaintOptions::default().with_omega(1.5));
//! let out = ctx.solve(&image, &mask).unwrap();
//! assert!(out.stats.converged);
//! ```

pub mod inpaint_context;
pub use inpaint_context::{InpaintContext, SolverKind};
