//! Named trial shapes
//!
//! - Pairs: two floats per trial. Hardware addition is correctly rounded for
//!   two operands, so this shape checks the bridge against the CPU.
//! - Sequences: three to ten floats per trial, where intermediate rounding
//!   and intermediate overflow actually happen.

use super::constants::{PAIR_LEN, SEQUENCE_MAX_LEN, SEQUENCE_MIN_LEN};
use super::types::FuzzConfig;

/// Fuzz profile name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileName {
    /// Two floats per trial
    Pairs,
    /// Three to ten floats per trial
    Sequences,
}

impl ProfileName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pairs => "pairs",
            Self::Sequences => "sequences",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pair" | "pairs" => Some(Self::Pairs),
            "seq" | "sequence" | "sequences" => Some(Self::Sequences),
            _ => None,
        }
    }

    /// Default configuration for this profile
    pub fn config(&self) -> FuzzConfig {
        match self {
            Self::Pairs => FuzzConfig::pairs(),
            Self::Sequences => FuzzConfig::sequences(),
        }
    }

    /// Inclusive length bounds of one trial's input
    pub fn len_bounds(&self) -> (usize, usize) {
        match self {
            Self::Pairs => (PAIR_LEN, PAIR_LEN),
            Self::Sequences => (SEQUENCE_MIN_LEN, SEQUENCE_MAX_LEN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_names() {
        assert_eq!(ProfileName::from_str("PAIRS"), Some(ProfileName::Pairs));
        assert_eq!(ProfileName::from_str("seq"), Some(ProfileName::Sequences));
        assert_eq!(ProfileName::from_str("triples"), None);
        assert_eq!(ProfileName::Sequences.as_str(), "sequences");
    }

    #[test]
    fn test_profile_configs_are_valid() {
        for profile in [ProfileName::Pairs, ProfileName::Sequences] {
            let config = profile.config();
            assert!(config.validate().is_ok());
            assert_eq!((config.min_len, config.max_len), profile.len_bounds());
        }
    }
}
