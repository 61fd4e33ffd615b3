pub mod options;

pub use options::{InpaintOptions, validate_omega};
