//! Softmax cross-entropy loss and gradient for a linear classifier `scores = X·W`,
//! with L2 regularization, in two interchangeable implementations:
//!
//! - [`softmax_loss_naive`] — explicit loops over examples and classes
//! - [`softmax_loss_vectorized`] — whole-matrix `ndarray` operations

pub mod error;
pub mod math;
pub mod loss;
pub mod check;
pub mod compare;

// Convenience re-exports
pub use error::{LossError, Result};
pub use math::matrix::Matrix;
pub use loss::{softmax_loss_naive, softmax_loss_vectorized, softmax_loss_batch, Strategy};
pub use check::{grad_check_sparse, GradCheckSample};
pub use compare::{compare_strategies, Batch, CompareConfig, Comparison};
