use rand::Rng;

use crate::error::{LossError, Result};
use crate::math::matrix::Matrix;

/// A labelled batch: `x` is N×D, `y[i]` is the class of row `i`.
#[derive(Debug, Clone)]
pub struct Batch {
    pub x: Matrix,
    pub y: Vec<usize>,
}

impl Batch {
    /// Standard-normal features with labels drawn uniformly from `0..num_classes`.
    ///
    /// Fails when examples are requested but `num_classes` is zero, since no
    /// label could be drawn.
    pub fn random<R: Rng + ?Sized>(
        num_examples: usize,
        num_features: usize,
        num_classes: usize,
        rng: &mut R,
    ) -> Result<Batch> {
        if num_classes == 0 && num_examples > 0 {
            return Err(LossError::Config("cannot label examples with zero classes".into()));
        }
        let x = Matrix::randn(num_examples, num_features, 1.0, rng);
        let y = (0..num_examples).map(|_| rng.gen_range(0..num_classes)).collect();
        Ok(Batch { x, y })
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}
