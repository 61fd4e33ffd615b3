//! Core grid abstractions: shape and masked-norm traits, and their `faer` wrappers.

pub mod traits;
pub mod wrappers;

pub use traits::{GridShape, MaskedNorm};
pub use wrappers::{Grid, ensure_same_shape};
