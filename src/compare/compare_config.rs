use serde::{Serialize, Deserialize};

use crate::error::{LossError, Result};

/// Configuration for a `compare_strategies` run.
///
/// # Fields
/// - `num_examples` — N, rows of the synthetic batch
/// - `num_features` — D, feature dimension (3073 = 32·32·3 pixels + bias column)
/// - `num_classes`  — C
/// - `reg`          — L2 regularization strength passed to both strategies
/// - `weight_scale` — W is drawn from N(0, 1) · `weight_scale`
/// - `seed`         — seeds the generator for W, X and y
/// - `repeats`      — timed evaluations per strategy; the fastest is reported
///
/// Fields missing from a JSON file take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub num_examples: usize,
    pub num_features: usize,
    pub num_classes: usize,
    pub reg: f64,
    pub weight_scale: f64,
    pub seed: u64,
    pub repeats: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            num_examples: 500,
            num_features: 3073,
            num_classes: 10,
            reg: 5e-6,
            weight_scale: 1e-4,
            seed: 0,
            repeats: 1,
        }
    }
}

impl CompareConfig {
    /// Rejects sizes the loss functions cannot evaluate.
    pub fn validate(&self) -> Result<()> {
        if self.num_examples == 0 || self.num_features == 0 || self.num_classes == 0 {
            return Err(LossError::Config(
                "num_examples, num_features and num_classes must all be positive".into(),
            ));
        }
        if self.repeats == 0 {
            return Err(LossError::Config("repeats must be at least 1".into()));
        }
        if !self.reg.is_finite() || self.reg < 0.0 {
            return Err(LossError::InvalidRegularization(self.reg));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| LossError::Config(e.to_string()))
    }

    /// Deserializes and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<CompareConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: CompareConfig = serde_json::from_reader(reader)
            .map_err(|e| LossError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: CompareConfig = serde_json::from_str(r#"{ "num_examples": 32, "seed": 9 }"#).unwrap();
        assert_eq!(cfg.num_examples, 32);
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.num_classes, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn json_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("linear-softmax-cfg-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let cfg = CompareConfig { num_classes: 3, repeats: 4, ..CompareConfig::default() };
        cfg.save_json(path).unwrap();
        let loaded = CompareConfig::load_json(path).unwrap();
        std::fs::remove_file(path).ok();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cfg = CompareConfig { num_classes: 0, ..CompareConfig::default() };
        assert!(matches!(cfg.validate(), Err(LossError::Config(_))));
        let cfg = CompareConfig { reg: -0.5, ..CompareConfig::default() };
        assert!(matches!(cfg.validate(), Err(LossError::InvalidRegularization(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            CompareConfig::load_json("/nonexistent/linear-softmax.json"),
            Err(LossError::Io(_))
        ));
    }
}
