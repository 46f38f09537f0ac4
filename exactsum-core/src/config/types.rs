use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_PROGRESS_INTERVAL, DEFAULT_TRIALS, PAIR_LEN, SEQUENCE_MAX_LEN, SEQUENCE_MIN_LEN,
};

/// Parameters of one fuzz run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzConfig {
    /// Seed for the float generator (random and logged when absent)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of independent trials
    #[serde(default = "default_trials")]
    pub trials: u64,

    /// Shortest input sequence per trial
    #[serde(default = "default_min_len")]
    pub min_len: usize,

    /// Longest input sequence per trial
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Trials between progress log lines
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_trials() -> u64 {
    DEFAULT_TRIALS
}

fn default_min_len() -> usize {
    PAIR_LEN
}

fn default_max_len() -> usize {
    PAIR_LEN
}

fn default_progress_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self::pairs()
    }
}

impl FuzzConfig {
    /// Two floats per trial
    pub fn pairs() -> Self {
        Self {
            seed: None,
            trials: default_trials(),
            min_len: PAIR_LEN,
            max_len: PAIR_LEN,
            progress_interval: default_progress_interval(),
        }
    }

    /// Three to ten floats per trial
    pub fn sequences() -> Self {
        Self {
            min_len: SEQUENCE_MIN_LEN,
            max_len: SEQUENCE_MAX_LEN,
            ..Self::pairs()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }
}
