//! Seeded randomized trials against the oracle
//!
//! Trials run sequentially from one generator so a divergence can always be
//! replayed from `(seed, trial)`. The first divergence ends the run; it is
//! never retried or averaged away.

use tracing::{debug, error, info};

use super::{compare_with_oracle, Summation, Verdict};
use crate::config::FuzzConfig;
use crate::core::errors::{Divergence, FuzzError};
use crate::generator::FloatGenerator;

/// Summary of a run in which every trial agreed with the oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzReport {
    pub algorithm: &'static str,
    pub seed: u64,
    pub trials: u64,
    pub matched: u64,
    /// All-negative-zero inputs the oracle abstained on
    pub excluded: u64,
}

/// Drives an algorithm through `config.trials` adversarial inputs
pub struct OracleFuzzer<'a, S: Summation + ?Sized> {
    algorithm: &'a S,
    config: FuzzConfig,
}

impl<'a, S: Summation + ?Sized> OracleFuzzer<'a, S> {
    pub fn new(algorithm: &'a S, config: FuzzConfig) -> Self {
        Self { algorithm, config }
    }

    pub fn config(&self) -> &FuzzConfig {
        &self.config
    }

    /// Run every trial, stopping at the first divergence
    pub fn run(&self) -> Result<FuzzReport, FuzzError> {
        self.config
            .validate()
            .map_err(|e| FuzzError::InvalidConfig(e.to_string()))?;

        let seed = self.config.seed.unwrap_or_else(rand::random);
        info!(seed, algorithm = self.algorithm.name(), "fuzzer seed");

        let mut generator = FloatGenerator::from_seed(seed);
        let mut matched = 0u64;
        let mut excluded = 0u64;

        for trial in 0..self.config.trials {
            if trial % self.config.progress_interval == 0 {
                info!(trial, total = self.config.trials, "fuzz progress");
            }

            let values = generator.random_sequence(self.config.min_len, self.config.max_len);

            match compare_with_oracle(self.algorithm, &values) {
                Verdict::Match => matched += 1,
                Verdict::Excluded => {
                    debug!(trial, "all inputs are -0.0, oracle abstains");
                    excluded += 1;
                }
                Verdict::Mismatch { expected, actual } => {
                    error!(
                        trial,
                        seed,
                        ?values,
                        expected,
                        actual,
                        algorithm = self.algorithm.name(),
                        "divergence from oracle"
                    );
                    return Err(Divergence {
                        algorithm: self.algorithm.name(),
                        seed,
                        trial,
                        values,
                        expected,
                        actual,
                    }
                    .into());
                }
            }
        }

        info!(matched, excluded, "fuzz run complete");

        Ok(FuzzReport {
            algorithm: self.algorithm.name(),
            seed,
            trials: self.config.trials,
            matched,
            excluded,
        })
    }
}

/// Regenerate the input of one trial from its seed
///
/// Walks the generator through every earlier trial, so the cost is linear
/// in `trial`.
pub fn replay_trial(config: &FuzzConfig, seed: u64, trial: u64) -> Vec<f64> {
    let mut generator = FloatGenerator::from_seed(seed);
    for _ in 0..trial {
        generator.random_sequence(config.min_len, config.max_len);
    }
    generator.random_sequence(config.min_len, config.max_len)
}
