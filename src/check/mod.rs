pub mod grad_check;

pub use grad_check::{grad_check_sparse, GradCheckSample};
