use ndarray::{Array2, ArrayView2, Axis};

/// Softmax of a single score vector, shifted by its maximum before `exp`.
///
/// The shift leaves the result unchanged and keeps every exponent ≤ 0, so
/// arbitrarily large scores cannot overflow.
pub fn stable_softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Row-wise stable softmax of an N×C score matrix, using axis reductions
/// instead of a loop over rows.
pub fn softmax_rows(scores: ArrayView2<f64>) -> Array2<f64> {
    let row_max = scores
        .fold_axis(Axis(1), f64::NEG_INFINITY, |&m, &v| m.max(v))
        .insert_axis(Axis(1));
    let exps = (&scores - &row_max).mapv(f64::exp);
    let row_sum = exps.sum_axis(Axis(1)).insert_axis(Axis(1));
    exps / &row_sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn probabilities_sum_to_one() {
        let p = stable_softmax(&[1.0, 2.0, 3.0]);
        assert_relative_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert!(p[2] > p[1] && p[1] > p[0]);
    }

    #[test]
    fn huge_scores_do_not_overflow() {
        let p = stable_softmax(&[1000.0, 1001.0, 999.0]);
        assert!(p.iter().all(|v| v.is_finite()));
        let shifted = stable_softmax(&[0.0, 1.0, -1.0]);
        for (a, b) in p.iter().zip(&shifted) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn rows_match_single_vector_version() {
        let scores = array![[1.0, 2.0, 3.0], [-5.0, 0.0, 5.0], [7e2, 7e2, 7e2]];
        let p = softmax_rows(scores.view());
        for (i, row) in scores.outer_iter().enumerate() {
            let expected = stable_softmax(row.as_slice().unwrap());
            for (j, e) in expected.iter().enumerate() {
                assert_relative_eq!(p[[i, j]], *e, epsilon = 1e-12);
            }
        }
        assert_relative_eq!(p[[2, 0]], 1.0 / 3.0, epsilon = 1e-12);
    }
}
