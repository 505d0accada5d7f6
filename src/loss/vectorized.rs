use ndarray::{Array2, ArrayView2, Axis};

use crate::error::Result;
use crate::loss::checks::validate_inputs;
use crate::math::matrix::Matrix;
use crate::math::softmax::softmax_rows;

/// Softmax loss and gradient expressed as whole-matrix operations.
///
/// Same inputs, outputs and errors as [`softmax_loss_naive`](super::naive::softmax_loss_naive).
/// The caller's matrices are copied into `ndarray` arrays; use
/// [`softmax_loss_batch`] directly when the data already lives there.
pub fn softmax_loss_vectorized(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> Result<(f64, Matrix)> {
    w.check_consistent()?;
    x.check_consistent()?;
    validate_inputs(w.shape(), x.shape(), y, reg)?;
    let (loss, dw) = softmax_loss_batch(w.to_array().view(), x.to_array().view(), y, reg)?;
    Ok((loss, Matrix::from(dw)))
}

/// Batch strategy over `ndarray` views. No loop over examples or classes:
///
///   S  = X·W                         (N×C)
///   P  = softmax(S) row-wise         (max / sum reduced along Axis(1))
///   Y  = one-hot(y)                  (N×C indicator)
///   dW = (Xᵀ·P − Xᵀ·Y) / N + 2·reg·W
pub fn softmax_loss_batch(
    w: ArrayView2<f64>,
    x: ArrayView2<f64>,
    y: &[usize],
    reg: f64,
) -> Result<(f64, Array2<f64>)> {
    validate_inputs(w.dim(), x.dim(), y, reg)?;

    let num_train = x.nrows() as f64;
    let scores = x.dot(&w);
    let probs = softmax_rows(scores.view());

    let indicator = Array2::from_shape_fn(probs.raw_dim(), |(i, j)| {
        if y[i] == j { 1.0 } else { 0.0 }
    });

    let correct_probs = (&probs * &indicator).sum_axis(Axis(1));
    let mut loss = correct_probs.mapv(|p| -p.ln()).sum() / num_train;
    loss += reg * w.mapv(|v| v * v).sum();

    let xt = x.t();
    let mut dw = xt.dot(&probs) - xt.dot(&indicator);
    dw /= num_train;
    dw.scaled_add(2.0 * reg, &w);

    Ok((loss, dw))
}
