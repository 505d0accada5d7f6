pub mod matrix;
pub mod softmax;

pub use matrix::Matrix;
pub use softmax::{stable_softmax, softmax_rows};
