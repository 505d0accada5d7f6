use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::compare::batch::Batch;
use crate::compare::compare_config::CompareConfig;
use crate::error::Result;
use crate::loss::strategy::Strategy;
use crate::math::matrix::Matrix;

/// Result of evaluating one strategy on the shared batch.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyRun {
    pub strategy: Strategy,
    pub loss: f64,
    /// Fastest wall-clock time over `repeats` evaluations, in milliseconds.
    pub elapsed_ms: f64,
    #[serde(skip)]
    pub grad: Matrix,
}

/// Side-by-side report of both strategies on the same W, X, y and reg.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub naive: StrategyRun,
    pub vectorized: StrategyRun,
    /// |loss_naive - loss_vectorized|
    pub loss_difference: f64,
    /// Frobenius norm of dW_naive - dW_vectorized.
    pub gradient_difference: f64,
    /// ‖dW_naive - dW_vectorized‖ / (‖dW_naive‖ + ‖dW_vectorized‖)
    pub gradient_relative_error: f64,
}

impl Comparison {
    /// Vectorized speedup over the naive loops, or `None` when the batch run
    /// was too fast for the clock to register.
    pub fn speedup(&self) -> Option<f64> {
        if self.vectorized.elapsed_ms > 0.0 {
            Some(self.naive.elapsed_ms / self.vectorized.elapsed_ms)
        } else {
            None
        }
    }
}

/// Builds a random weight matrix and batch from `config.seed`, evaluates both
/// strategies on them and reports losses, timings and their disagreement.
pub fn compare_strategies(config: &CompareConfig) -> Result<Comparison> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let w = Matrix::randn(config.num_features, config.num_classes, config.weight_scale, &mut rng);
    let batch = Batch::random(config.num_examples, config.num_features, config.num_classes, &mut rng)?;

    let naive = run_strategy(Strategy::Naive, &w, &batch, config)?;
    let vectorized = run_strategy(Strategy::Vectorized, &w, &batch, config)?;

    let loss_difference = (naive.loss - vectorized.loss).abs();
    let gradient_difference = (naive.grad.clone() - vectorized.grad.clone())
        .sum_of_squares()
        .sqrt();
    let gradient_relative_error = naive.grad.relative_error(&vectorized.grad);

    Ok(Comparison {
        naive,
        vectorized,
        loss_difference,
        gradient_difference,
        gradient_relative_error,
    })
}

fn run_strategy(
    strategy: Strategy,
    w: &Matrix,
    batch: &Batch,
    config: &CompareConfig,
) -> Result<StrategyRun> {
    let mut best_ms = f64::INFINITY;
    let mut last = None;

    for _ in 0..config.repeats {
        let t_start = Instant::now();
        let out = strategy.evaluate(w, &batch.x, &batch.y, config.reg)?;
        best_ms = best_ms.min(t_start.elapsed().as_secs_f64() * 1e3);
        last = Some(out);
    }

    // `validate` guarantees repeats >= 1.
    let (loss, grad) = last.unwrap_or_else(|| (f64::NAN, Matrix::default()));
    Ok(StrategyRun { strategy, loss, elapsed_ms: best_ms, grad })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> CompareConfig {
        CompareConfig {
            num_examples: 20,
            num_features: 8,
            num_classes: 4,
            reg: 0.1,
            weight_scale: 0.5,
            seed: 42,
            repeats: 2,
        }
    }

    #[test]
    fn strategies_agree_on_shared_batch() {
        let report = compare_strategies(&small_config()).unwrap();
        assert_eq!(report.naive.strategy, Strategy::Naive);
        assert_eq!(report.vectorized.strategy, Strategy::Vectorized);
        assert!(report.loss_difference < 1e-10);
        assert!(report.gradient_difference < 1e-10);
        assert!(report.gradient_relative_error < 1e-10);
        assert!(report.naive.elapsed_ms >= 0.0);
    }

    #[test]
    fn speedup_needs_a_measured_batch_run() {
        let mut report = compare_strategies(&small_config()).unwrap();
        report.naive.elapsed_ms = 0.0;
        report.vectorized.elapsed_ms = 0.0;
        assert_eq!(report.speedup(), None);

        report.naive.elapsed_ms = 6.0;
        report.vectorized.elapsed_ms = 2.0;
        assert_eq!(report.speedup(), Some(3.0));
    }

    #[test]
    fn same_seed_reproduces_losses() {
        let a = compare_strategies(&small_config()).unwrap();
        let b = compare_strategies(&small_config()).unwrap();
        assert_eq!(a.naive.loss, b.naive.loss);
    }

    #[test]
    fn report_serializes_without_gradients() {
        let report = compare_strategies(&small_config()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["naive"]["strategy"], "naive");
        assert!(json["naive"].get("grad").is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = CompareConfig { repeats: 0, ..small_config() };
        assert!(compare_strategies(&cfg).is_err());
    }
}
