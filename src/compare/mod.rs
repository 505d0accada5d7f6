pub mod batch;
pub mod compare_config;
pub mod comparison;

pub use batch::Batch;
pub use compare_config::CompareConfig;
pub use comparison::{compare_strategies, Comparison, StrategyRun};
