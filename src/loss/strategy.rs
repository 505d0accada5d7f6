use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::loss::naive::softmax_loss_naive;
use crate::loss::vectorized::softmax_loss_vectorized;
use crate::math::matrix::Matrix;

/// Selects which implementation computes the softmax loss.
///
/// - `Naive`      — explicit loops over examples and classes; the reference.
/// - `Vectorized` — whole-matrix `ndarray` operations.
///
/// Both satisfy the same contract and agree to floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Naive,
    Vectorized,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Naive, Strategy::Vectorized];

    /// Runs the selected implementation; see `softmax_loss_naive` for the contract.
    pub fn evaluate(self, w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> Result<(f64, Matrix)> {
        match self {
            Strategy::Naive      => softmax_loss_naive(w, x, y, reg),
            Strategy::Vectorized => softmax_loss_vectorized(w, x, y, reg),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive      => "naive",
            Strategy::Vectorized => "vectorized",
        }
    }
}
