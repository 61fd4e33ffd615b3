// 4-neighbor averaging stencils

use faer::Mat;
use num_traits::Float;

use crate::core::wrappers::ensure_same_shape;
use crate::error::InpaintError;
use crate::grid::Mask;

/// Mean of the up, down, left and right neighbors of every cell.
///
/// Indices wrap around at the edges (toroidal access), so row 0 sees the
/// last row as its upper neighbor and column 0 sees the last column.
pub fn neighbor_average<T: Float>(u: &Mat<T>) -> Mat<T> {
    let (m, n) = (u.nrows(), u.ncols());
    let quarter = (T::one() + T::one() + T::one() + T::one()).recip();
    Mat::from_fn(m, n, |i, j| {
        let up = u[((i + m - 1) % m, j)];
        let down = u[((i + 1) % m, j)];
        let left = u[(i, (j + n - 1) % n)];
        let right = u[(i, (j + 1) % n)];
        (up + down + left + right) * quarter
    })
}

/// Euclidean norm of the Laplace residual `avg - u` over masked interior cells.
///
/// Neighbors are read without wrap-around, so border cells are excluded.
/// Zero once the masked interior is harmonic.
///
/// # Errors
/// `InvalidShape` if `mask` does not match `u`.
pub fn masked_residual_norm<T: Float>(u: &Mat<T>, mask: &Mask) -> Result<T, InpaintError> {
    ensure_same_shape(u, mask)?;
    let (m, n) = (u.nrows(), u.ncols());
    if m < 3 || n < 3 {
        return Ok(T::zero());
    }
    let quarter = (T::one() + T::one() + T::one() + T::one()).recip();
    let mut acc = T::zero();
    for (i, j) in mask.iter_masked() {
        if i == 0 || j == 0 || i + 1 >= m || j + 1 >= n {
            continue;
        }
        let avg = (u[(i + 1, j)] + u[(i - 1, j)] + u[(i, j + 1)] + u[(i, j - 1)]) * quarter;
        let r = avg - u[(i, j)];
        acc = acc + r * r;
    }
    Ok(acc.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_wraps_at_the_corner() {
        let u = Mat::from_fn(3, 4, |i, j| if (i, j) == (0, 0) { 8.0 } else { 0.0 });
        let avg = neighbor_average(&u);
        assert_eq!(avg[(1, 0)], 2.0);
        assert_eq!(avg[(2, 0)], 2.0);
        assert_eq!(avg[(0, 1)], 2.0);
        assert_eq!(avg[(0, 3)], 2.0);
        assert_eq!(avg[(0, 0)], 0.0);
        assert_eq!(avg[(1, 1)], 0.0);
    }

    #[test]
    fn residual_vanishes_on_linear_ramp() {
        let u = Mat::from_fn(5, 5, |i, j| (2 * i + j) as f64);
        let mask = Mask::full(5, 5);
        assert!(masked_residual_norm(&u, &mask).unwrap().abs() < 1e-12);
    }
}
