// Damage a block of an image and restore it with Jacobi and SOR.
//
// Usage: cargo run --example inpaint_demo [image.txt] [out_dir]
// Without an input file a smooth synthetic 100x100 image is used.

use std::path::PathBuf;

use faer::Mat;
use laplace_inpaint::config::InpaintOptions;
use laplace_inpaint::error::InpaintError;
use laplace_inpaint::grid::{Mask, load_grid, save_grid};
use laplace_inpaint::solver::{OmegaChoice, OmegaSearch, inpaint_jacobi, inpaint_sor};
use tracing::info;

fn synthetic(n: usize) -> Mat<f64> {
    Mat::from_fn(n, n, |i, j| {
        let (x, y) = (i as f64 / n as f64, j as f64 / n as f64);
        128.0 + 100.0 * (4.0 * x).sin() * (3.0 * y).cos()
    })
}

fn main() -> Result<(), InpaintError> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let image = match args.next() {
        Some(path) => load_grid(path)?,
        None => synthetic(100),
    };
    let out_dir = args.next().map(PathBuf::from);

    let (m, n) = (image.nrows(), image.ncols());
    let mask = Mask::rect(m, n, 60..70, 30..70);
    let damaged = mask.damage(&image, 0.0)?;
    info!(nrows = m, ncols = n, unknowns = mask.count(), "damaged image");

    let opts = InpaintOptions::default();
    let jacobi = inpaint_jacobi(&damaged, &mask, &opts)?;
    let sor = inpaint_sor(&damaged, &mask, &opts)?;
    println!("Jacobi: {} iterations (converged: {})", jacobi.stats.iterations, jacobi.stats.converged);
    println!("SOR:    {} iterations (converged: {})", sor.stats.iterations, sor.stats.converged);

    match OmegaSearch::default().run(&damaged, &mask)? {
        OmegaChoice::Best { omega, iterations } => println!("best omega {omega:.2}: {iterations} iterations"),
        OmegaChoice::NoImprovement { iterations } => println!("no omega converged within {iterations} iterations"),
    }

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(&dir)?;
        save_grid(&image, dir.join("original.txt"))?;
        save_grid(&damaged, dir.join("damaged.txt"))?;
        save_grid(&jacobi.image, dir.join("jacobi.txt"))?;
        save_grid(&sor.image, dir.join("sor.txt"))?;
        info!(dir = %dir.display(), "wrote grids");
    }
    Ok(())
}
