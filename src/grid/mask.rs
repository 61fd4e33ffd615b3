//! Boolean masks selecting the unknown cells of an image.
//!
//! A `Mask` is `true` where a pixel is unknown and must be estimated, and
//! `false` where the pixel value is fixed data. Storage is row-major.

use std::ops::Range;

use faer::Mat;
use num_traits::Float;

use crate::core::traits::GridShape;
use crate::error::InpaintError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    nrows: usize,
    ncols: usize,
    data: Vec<bool>,
}

impl Mask {
    /// All-false mask (nothing to estimate).
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols, data: vec![false; nrows * ncols] }
    }

    /// All-true mask.
    pub fn full(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols, data: vec![true; nrows * ncols] }
    }

    pub fn from_fn<F>(nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { nrows, ncols, data }
    }

    /// Build from nested rows. Every row must have the length of the first.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, InpaintError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(InpaintError::InvalidShape {
                    expected: (nrows, ncols),
                    found: (nrows, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Mask with the half-open rectangle `rows × cols` set, clipped to the shape.
    pub fn rect(nrows: usize, ncols: usize, rows: Range<usize>, cols: Range<usize>) -> Self {
        Self::from_fn(nrows, ncols, |i, j| rows.contains(&i) && cols.contains(&j))
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Returns `false` outside the mask bounds.
    pub fn get(&self, i: usize, j: usize) -> bool {
        i < self.nrows && j < self.ncols && self.data[i * self.ncols + j]
    }

    /// # Panics
    /// If `(i, j)` is out of bounds.
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        assert!(i < self.nrows && j < self.ncols, "mask index ({i}, {j}) out of bounds");
        self.data[i * self.ncols + j] = value;
    }

    /// Number of masked (unknown) cells.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&m| m)
    }

    /// Row-major iterator over the coordinates of masked cells.
    pub fn iter_masked(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let ncols = self.ncols;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m)
            .map(move |(k, _)| (k / ncols, k % ncols))
    }

    /// Copy of `image` with every masked cell overwritten by `fill`.
    pub fn damage<T: Float>(&self, image: &Mat<T>, fill: T) -> Result<Mat<T>, InpaintError> {
        crate::core::ensure_same_shape(image, self)?;
        Ok(Mat::from_fn(image.nrows(), image.ncols(), |i, j| {
            if self.get(i, j) { fill } else { image[(i, j)] }
        }))
    }
}

impl GridShape for Mask {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}
