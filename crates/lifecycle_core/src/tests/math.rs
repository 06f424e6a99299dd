//! Tests for the small linear-algebra routines backing the optimizer and
//! the correlated Monte Carlo sampler.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::math::{cholesky_lower, cholesky_lower_psd, correlate_normals, solve_spd};

/// The Cholesky factor must reproduce the original matrix: L L^T = m.
#[test]
fn test_cholesky_reproduces_matrix() {
    let m = [
        [0.0324, 0.00486, 0.0],
        [0.00486, 0.0324, 0.0009],
        [0.0, 0.0009, 0.0025],
    ];

    let l = cholesky_lower(&m, 1e-12).expect("matrix is positive definite");

    for i in 0..3 {
        for j in 0..3 {
            let mut reconstructed = 0.0;
            for k in 0..3 {
                reconstructed += l[i][k] * l[j][k];
            }
            assert!(
                (reconstructed - m[i][j]).abs() < 1e-12,
                "entry ({i},{j}): expected {}, got {}",
                m[i][j],
                reconstructed
            );
        }
    }
}

/// A zero-variance row makes the matrix singular for the strict
/// factorization used by the optimizer.
#[test]
fn test_strict_cholesky_rejects_singular() {
    let m = [[0.0, 0.0], [0.0, 0.0324]];
    assert!(cholesky_lower(&m, 1e-12).is_none());
}

/// An indefinite matrix is rejected even by the PSD-tolerant variant.
#[test]
fn test_psd_cholesky_rejects_indefinite() {
    let m = [[1.0, 2.0], [2.0, 1.0]];
    assert!(cholesky_lower_psd(&m, 1e-12).is_none());
}

/// The PSD-tolerant factorization maps a zero-variance asset (cash) to an
/// all-zero row, so its correlated draw is exactly zero.
#[test]
fn test_psd_cholesky_handles_zero_variance_row() {
    let m = [
        [0.0324, 0.0, 0.0],
        [0.0, 0.0049, 0.0],
        [0.0, 0.0, 0.0],
    ];

    let l = cholesky_lower_psd(&m, 1e-12).expect("matrix is positive semidefinite");
    assert_eq!(l[2], [0.0, 0.0, 0.0]);

    let shock = correlate_normals(&l, &[1.3, -0.4, 2.2]);
    assert_eq!(shock[2], 0.0, "zero-variance asset must draw exactly zero");
}

/// Cholesky solve must actually solve the system: m * x = b.
#[test]
fn test_solve_spd_solves_system() {
    let m = [[0.04, 0.01], [0.01, 0.0324]];
    let b = [0.05, 0.01];

    let x = solve_spd(&m, &b, 1e-12).expect("matrix is positive definite");

    for i in 0..2 {
        let lhs = m[i][0] * x[0] + m[i][1] * x[1];
        assert!(
            (lhs - b[i]).abs() < 1e-12,
            "row {i}: m*x = {lhs}, expected {}",
            b[i]
        );
    }
}

/// Correlated draws through the Cholesky factor must hit the target
/// correlation within Monte Carlo tolerance.
#[test]
fn test_correlated_normals_match_target_correlation() {
    let target = 0.8;
    let corr = [
        [1.0, target, 0.0],
        [target, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];
    let l = cholesky_lower_psd(&corr, 1e-12).expect("valid correlation matrix");

    let n = 20_000;
    let mut rng = StdRng::seed_from_u64(1);
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    let mut sum_xy = 0.0;

    for _ in 0..n {
        let z = [
            rng.sample::<f64, _>(StandardNormal),
            rng.sample::<f64, _>(StandardNormal),
            rng.sample::<f64, _>(StandardNormal),
        ];
        let x = correlate_normals(&l, &z);
        sum_x += x[0];
        sum_y += x[1];
        sum_xx += x[0] * x[0];
        sum_yy += x[1] * x[1];
        sum_xy += x[0] * x[1];
    }

    let nf = n as f64;
    let cov = sum_xy / nf - (sum_x / nf) * (sum_y / nf);
    let var_x = sum_xx / nf - (sum_x / nf).powi(2);
    let var_y = sum_yy / nf - (sum_y / nf).powi(2);
    let sample_corr = cov / (var_x * var_y).sqrt();

    assert!(
        (sample_corr - target).abs() < 0.03,
        "sample correlation {sample_corr} too far from target {target}"
    );
}
