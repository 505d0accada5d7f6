/// Naive vs. vectorized softmax loss on one random batch.
///
/// Defaults: W = 1e-4 · randn(3073, 10), 500 standard-normal examples, reg = 5e-6.
/// With such small weights the loss should come out close to ln(10) ≈ 2.3026.
///
/// Run with:
///   cargo run --example compare --release [config.json]
///
/// The optional JSON file may set any `CompareConfig` field; the rest default.

use linear_softmax::{compare_strategies, CompareConfig};

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => CompareConfig::load_json(&path)
            .unwrap_or_else(|e| panic!("Cannot load config '{}': {}", path, e)),
        None => CompareConfig::default(),
    };

    println!(
        "Batch: N = {}, D = {}, C = {}, reg = {:e}, seed = {}",
        config.num_examples, config.num_features, config.num_classes, config.reg, config.seed
    );
    println!("Sanity target: -ln(1/C) = {:.6}\n", (config.num_classes as f64).ln());

    let report = match compare_strategies(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("comparison failed: {e}");
            std::process::exit(1);
        }
    };

    println!("{:>12}  {:>14}  {:>12}", "Strategy", "Loss", "Time (ms)");
    println!("{}", "-".repeat(42));
    for run in [&report.naive, &report.vectorized] {
        println!("{:>12}  {:>14.8}  {:>12.3}", run.strategy.name(), run.loss, run.elapsed_ms);
    }

    println!("\nLoss difference:     {:e}", report.loss_difference);
    println!("Gradient difference: {:e}", report.gradient_difference);
    println!("Gradient rel. error: {:e}", report.gradient_relative_error);
    match report.speedup() {
        Some(x) => println!("Speedup:             {:.1}x", x),
        None => println!("Speedup:             (vectorized run below timer resolution)"),
    }

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("\n{json}"),
        Err(e) => eprintln!("could not serialize report: {e}"),
    }
}
