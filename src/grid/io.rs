//! Plain-text matrix I/O.
//!
//! One grid row per line, columns separated by whitespace. Blank lines and
//! lines starting with `#` are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use faer::Mat;
use num_traits::Float;
use tracing::debug;

use crate::error::InpaintError;

/// Parse a text matrix from any buffered reader.
///
/// # Errors
/// `Parse` for a token that is not a number, `RaggedRow` when a row's
/// length differs from the first row, `Io` on read failures.
pub fn read_grid<T, R>(reader: R) -> Result<Mat<T>, InpaintError>
where
    T: Float + std::str::FromStr,
    R: BufRead,
{
    let mut rows: Vec<Vec<T>> = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let row = trimmed
            .split_whitespace()
            .map(|tok| {
                tok.parse::<T>().map_err(|_| InpaintError::Parse {
                    line: lineno + 1,
                    token: tok.to_string(),
                })
            })
            .collect::<Result<Vec<T>, _>>()?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(InpaintError::RaggedRow {
                    line: lineno + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    Ok(Mat::from_fn(nrows, ncols, |i, j| rows[i][j]))
}

/// Load a text matrix from `path`.
pub fn load_grid<T, P>(path: P) -> Result<Mat<T>, InpaintError>
where
    T: Float + std::str::FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let grid: Mat<T> = read_grid(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), nrows = grid.nrows(), ncols = grid.ncols(), "loaded grid");
    Ok(grid)
}

/// Write `grid` as a text matrix, one row per line.
pub fn write_grid<T, W>(grid: &Mat<T>, mut writer: W) -> Result<(), InpaintError>
where
    T: Float + std::fmt::Display,
    W: Write,
{
    for i in 0..grid.nrows() {
        let line = (0..grid.ncols())
            .map(|j| grid[(i, j)].to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Save `grid` to `path`, truncating any existing file.
pub fn save_grid<T, P>(grid: &Mat<T>, path: P) -> Result<(), InpaintError>
where
    T: Float + std::fmt::Display,
    P: AsRef<Path>,
{
    write_grid(grid, BufWriter::new(File::create(path)?))
}
