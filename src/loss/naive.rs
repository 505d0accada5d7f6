use crate::error::Result;
use crate::loss::checks::validate_inputs;
use crate::math::matrix::Matrix;
use crate::math::softmax::stable_softmax;

/// Softmax loss and gradient with explicit loops over examples and classes.
///
/// Inputs have dimension D, there are C classes, and the batch holds N examples:
/// - `w` — weights, shape (D, C)
/// - `x` — one example per row, shape (N, D)
/// - `y` — labels, `y[i] = c` means `x[i]` belongs to class `c`, `0 <= c < C`
/// - `reg` — L2 regularization strength
///
/// Returns `(loss, dW)` where
///   loss = mean_i(-log p_i[y_i]) + reg·Σ W²
///   dW   = mean_i(X_iᵀ (p_i - onehot(y_i))) + 2·reg·W
///
/// This is the reference the batch strategy is checked against.
pub fn softmax_loss_naive(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> Result<(f64, Matrix)> {
    w.check_consistent()?;
    x.check_consistent()?;
    validate_inputs(w.shape(), x.shape(), y, reg)?;

    let num_train = x.rows;
    let (dim, num_classes) = w.shape();
    let mut loss = 0.0;
    let mut dw = Matrix::zeros(dim, num_classes);

    for i in 0..num_train {
        let xi = x.row(i);
        let correct_class = y[i];

        // scores_j = X_i · W[:, j]
        let mut scores = vec![0.0; num_classes];
        for (j, score) in scores.iter_mut().enumerate() {
            for (d, &xd) in xi.iter().enumerate() {
                *score += xd * w.data[d][j];
            }
        }
        let probs = stable_softmax(&scores);

        for (j, &p) in probs.iter().enumerate() {
            for (d, &xd) in xi.iter().enumerate() {
                dw.data[d][j] += p * xd;
            }
        }
        for (d, &xd) in xi.iter().enumerate() {
            dw.data[d][correct_class] -= xd;
        }

        loss -= probs[correct_class].ln();
    }

    let inv_n = 1.0 / num_train as f64;
    loss *= inv_n;
    loss += reg * w.sum_of_squares();

    for d in 0..dim {
        for j in 0..num_classes {
            dw.data[d][j] = dw.data[d][j] * inv_n + 2.0 * reg * w.data[d][j];
        }
    }

    Ok((loss, dw))
}
