//! Small dense linear algebra for the 2x2 and 3x3 covariance matrices.
//!
//! The optimizer needs a symmetric positive-definite solve; Monte Carlo
//! sampling needs a factorization that tolerates semidefinite matrices
//! (cash usually has zero volatility). Both go through Cholesky rather than
//! explicit inversion.

/// Strict Cholesky factorization: lower-triangular `L` with `L L^T = m`.
///
/// Returns `None` when the matrix is not positive definite within `tol`,
/// which the optimizer surfaces as a singular-covariance error.
#[must_use]
pub fn cholesky_lower<const N: usize>(m: &[[f64; N]; N], tol: f64) -> Option<[[f64; N]; N]> {
    let mut l = [[0.0_f64; N]; N];

    for i in 0..N {
        for j in 0..=i {
            let mut sum = m[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if sum <= tol {
                    return None;
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    Some(l)
}

/// Cholesky factorization tolerating positive *semi*definite matrices.
///
/// Zero-variance rows (e.g. cash) factor to all-zero rows, so applying the
/// factor to independent normals yields a degenerate (constant) component.
/// Returns `None` only for indefinite matrices.
#[must_use]
pub fn cholesky_lower_psd<const N: usize>(m: &[[f64; N]; N], tol: f64) -> Option<[[f64; N]; N]> {
    let mut l = [[0.0_f64; N]; N];

    for i in 0..N {
        for j in 0..=i {
            let mut sum = m[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if sum < -tol {
                    return None;
                }
                l[i][j] = if sum > tol { sum.sqrt() } else { 0.0 };
            } else if l[j][j] > 0.0 {
                l[i][j] = sum / l[j][j];
            }
            // else: pivot is zero, entry stays zero
        }
    }

    Some(l)
}

/// Solves `m x = b` for symmetric positive-definite `m` via Cholesky and
/// forward/back substitution. `None` when `m` is not positive definite.
#[must_use]
pub fn solve_spd<const N: usize>(m: &[[f64; N]; N], b: &[f64; N], tol: f64) -> Option<[f64; N]> {
    let l = cholesky_lower(m, tol)?;

    // Forward: L y = b
    let mut y = [0.0_f64; N];
    for i in 0..N {
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[i][k] * y[k];
        }
        y[i] = sum / l[i][i];
    }

    // Back: L^T x = y
    let mut x = [0.0_f64; N];
    for i in (0..N).rev() {
        let mut sum = y[i];
        for k in (i + 1)..N {
            sum -= l[k][i] * x[k];
        }
        x[i] = sum / l[i][i];
    }

    Some(x)
}

/// Applies a lower-triangular Cholesky factor to independent standard
/// normals, producing draws with the factored covariance.
#[must_use]
pub fn correlate_normals<const N: usize>(l: &[[f64; N]; N], z: &[f64; N]) -> [f64; N] {
    let mut out = [0.0_f64; N];
    for i in 0..N {
        let mut sum = 0.0;
        for j in 0..=i {
            sum += l[i][j] * z[j];
        }
        out[i] = sum;
    }
    out
}
