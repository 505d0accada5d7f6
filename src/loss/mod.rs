pub mod checks;
pub mod naive;
pub mod vectorized;
pub mod strategy;

pub use checks::validate_inputs;
pub use naive::softmax_loss_naive;
pub use vectorized::{softmax_loss_vectorized, softmax_loss_batch};
pub use strategy::Strategy;
