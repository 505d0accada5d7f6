use rand::Rng;
use serde::Serialize;

use crate::math::matrix::Matrix;

/// One coordinate compared by [`grad_check_sparse`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradCheckSample {
    pub row: usize,
    pub col: usize,
    /// Central difference (f(w + h) - f(w - h)) / 2h.
    pub numerical: f64,
    pub analytic: f64,
    /// |analytic - numerical| / (|analytic| + |numerical|).
    pub relative_error: f64,
}

impl GradCheckSample {
    pub fn passes(&self, tol: f64) -> bool {
        self.relative_error < tol
    }
}

/// Compares `analytic` against central finite differences of `f` at
/// `num_checks` randomly chosen coordinates of `w`.
///
/// `f` must be the scalar function whose gradient `analytic` claims to be;
/// `w` is perturbed on a private copy.
pub fn grad_check_sparse<F, R>(
    f: F,
    w: &Matrix,
    analytic: &Matrix,
    num_checks: usize,
    h: f64,
    rng: &mut R,
) -> Vec<GradCheckSample>
where
    F: Fn(&Matrix) -> f64,
    R: Rng + ?Sized,
{
    assert_eq!(w.shape(), analytic.shape(), "gradient must have the shape of w");
    if w.rows == 0 || w.cols == 0 {
        return Vec::new();
    }

    let mut probe = w.clone();
    (0..num_checks)
        .map(|_| {
            let row = rng.gen_range(0..w.rows);
            let col = rng.gen_range(0..w.cols);
            let old = probe.data[row][col];

            probe.data[row][col] = old + h;
            let f_plus = f(&probe);
            probe.data[row][col] = old - h;
            let f_minus = f(&probe);
            probe.data[row][col] = old;

            let numerical = (f_plus - f_minus) / (2.0 * h);
            let ana = analytic.data[row][col];
            GradCheckSample {
                row,
                col,
                numerical,
                analytic: ana,
                relative_error: relative_error(numerical, ana),
            }
        })
        .collect()
}

fn relative_error(a: f64, b: f64) -> f64 {
    let denom = (a.abs() + b.abs()).max(f64::MIN_POSITIVE);
    (a - b).abs() / denom
}
