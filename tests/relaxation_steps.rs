//! Tests for the neighbor averager and the single-sweep relaxation steppers.
//!
//! These tests pin down the two boundary policies: Jacobi reads neighbors
//! with wrap-around and updates every masked cell from the same iterate,
//! while SOR sweeps only the interior, in place, in row-major order.

use approx::assert_abs_diff_eq;
use faer::Mat;
use laplace_inpaint::error::InpaintError;
use laplace_inpaint::grid::Mask;
use laplace_inpaint::relaxation::{
    Jacobi, Relaxation, Sor, jacobi_step, masked_residual_norm, neighbor_average, sor_sweep,
};

/// 10×10 zeros with a hot corner at (0, 0).
fn hot_corner() -> (Mat<f64>, Mask) {
    let u = Mat::from_fn(10, 10, |i, j| if (i, j) == (0, 0) { 100.0 } else { 0.0 });
    let mut mask = Mask::full(10, 10);
    mask.set(0, 0, false);
    (u, mask)
}

#[test]
fn jacobi_step_spreads_hot_corner_to_wrapped_neighbors() {
    let (u, mask) = hot_corner();
    let next = jacobi_step(&u, &mask, 1.0).unwrap();
    let neighbors = [(1, 0), (0, 1), (9, 0), (0, 9)];
    for i in 0..10 {
        for j in 0..10 {
            let expected = if (i, j) == (0, 0) {
                100.0
            } else if neighbors.contains(&(i, j)) {
                25.0
            } else {
                0.0
            };
            assert_eq!(next[(i, j)], expected, "cell ({i}, {j})");
        }
    }
    // input untouched
    assert_eq!(u[(1, 0)], 0.0);
}

#[test]
fn jacobi_step_blends_with_omega() {
    let (u, mask) = hot_corner();
    let next = jacobi_step(&u, &mask, 0.5).unwrap();
    assert_abs_diff_eq!(next[(0, 1)], 12.5, epsilon = 1e-12);
}

#[test]
fn jacobi_is_synchronous() {
    // With in-place updates (1,0) would feed (2,0) within the same step.
    let (u, mask) = hot_corner();
    let next = jacobi_step(&u, &mask, 1.0).unwrap();
    assert_eq!(next[(2, 0)], 0.0);
}

#[test]
fn sor_sweep_uses_fresh_values_and_skips_border() {
    let mut u = Mat::from_fn(4, 4, |i, j| if (i, j) == (0, 1) { 8.0 } else { 0.0 });
    let mask = Mask::full(4, 4);
    sor_sweep(&mut u, &mask, 1.0).unwrap();
    // (1,1) sees the border value 8 -> 2; (1,2) sees updated (1,1) -> 0.5;
    // (2,1) sees updated (1,1) -> 0.5; (2,2) sees (1,2) and (2,1) -> 0.25.
    assert_abs_diff_eq!(u[(1, 1)], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(u[(1, 2)], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(u[(2, 1)], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(u[(2, 2)], 0.25, epsilon = 1e-12);
    assert_eq!(u[(0, 1)], 8.0);
    assert_eq!(u[(3, 3)], 0.0);
}

#[test]
fn sor_sweep_ignores_unmasked_interior() {
    let mut u = Mat::from_fn(3, 3, |i, j| if (i, j) == (1, 1) { 5.0 } else { 1.0 });
    let mask = Mask::new(3, 3);
    sor_sweep(&mut u, &mask, 1.7).unwrap();
    assert_eq!(u[(1, 1)], 5.0);
}

#[test]
fn sor_sweep_on_thin_grid_is_a_no_op() {
    let mut u = Mat::from_fn(2, 6, |i, j| (i + j) as f64);
    let mask = Mask::full(2, 6);
    sor_sweep(&mut u, &mask, 1.0).unwrap();
    for i in 0..2 {
        for j in 0..6 {
            assert_eq!(u[(i, j)], (i + j) as f64);
        }
    }
}

#[test]
fn constant_grid_is_a_fixed_point() {
    let u = Mat::from_fn(6, 7, |_, _| 3.25);
    let mask = Mask::from_fn(6, 7, |i, j| (i * j) % 3 == 1);
    let avg = neighbor_average(&u);
    let mut v = jacobi_step(&u, &mask, 1.3).unwrap();
    let mut w = u.clone();
    sor_sweep(&mut w, &mask, 1.9).unwrap();
    Sor::new(0.7).sweep(&mut v, &mask).unwrap();
    for i in 0..6 {
        for j in 0..7 {
            assert_eq!(avg[(i, j)], 3.25);
            assert_abs_diff_eq!(v[(i, j)], 3.25, epsilon = 1e-12);
            assert_abs_diff_eq!(w[(i, j)], 3.25, epsilon = 1e-12);
        }
    }
}

#[test]
fn steppers_reject_transposed_mask() {
    let u = Mat::from_fn(3, 5, |i, j| (i * 5 + j) as f64);
    let mask = Mask::full(5, 3);

    match jacobi_step(&u, &mask, 1.0) {
        Err(InpaintError::InvalidShape { expected, found }) => {
            assert_eq!(expected, (3, 5));
            assert_eq!(found, (5, 3));
        }
        other => panic!("expected InvalidShape, got {other:?}"),
    }

    let mut v = u.clone();
    assert!(matches!(sor_sweep(&mut v, &mask, 1.0), Err(InpaintError::InvalidShape { .. })));
    assert!(matches!(Jacobi::new(1.0).sweep(&mut v, &mask), Err(InpaintError::InvalidShape { .. })));
    assert!(matches!(Sor::new(1.5).sweep(&mut v, &mask), Err(InpaintError::InvalidShape { .. })));
    assert!(matches!(masked_residual_norm(&v, &mask), Err(InpaintError::InvalidShape { .. })));
    for i in 0..3 {
        for j in 0..5 {
            assert_eq!(v[(i, j)], u[(i, j)], "cell ({i}, {j}) changed");
        }
    }
}

#[test]
fn relaxation_display() {
    assert_eq!(format!("{}", Sor::new(1.5)), "SOR(omega=1.5)");
    assert_eq!(format!("{}", Jacobi::<f64>::default()), "Jacobi(omega=1)");
}
