//! Grid module: masks and plain-text grid I/O.

pub mod io;
pub mod mask;

pub use io::{load_grid, read_grid, save_grid, write_grid};
pub use mask::Mask;
