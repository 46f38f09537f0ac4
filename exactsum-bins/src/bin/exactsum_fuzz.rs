//! Oracle fuzzer
//!
//! Feeds boundary-biased random doubles to a summation algorithm and checks
//! every result bit for bit against the exact integer oracle. Exits non-zero
//! on the first divergence, after logging the seed, trial and inputs needed
//! to reproduce it.

use anyhow::{bail, Result};
use clap::Parser;
use exactsum_bins::common::{print_report, CommonArgs};
use exactsum_core::oracle::summation::{by_name, ALGORITHM_NAMES};
use exactsum_core::{init_logger, OracleFuzzer};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = CommonArgs::parse();

    // Initialize logging
    init_logger(&args.log_level, args.json_logs)?;

    let Some(algorithm) = by_name(&args.algorithm) else {
        bail!(
            "Unknown algorithm '{}', must be one of: {:?}",
            args.algorithm,
            ALGORITHM_NAMES
        );
    };

    let config = args.fuzz_config()?;

    tracing::info!("=== Exactsum: {} vs exact integer oracle ===", algorithm.name());
    tracing::info!(
        "Trials: {}, sequence length {}..={}",
        config.trials,
        config.min_len,
        config.max_len
    );

    let fuzzer = OracleFuzzer::new(&*algorithm, config);
    let report = fuzzer.run()?;

    // Print final statistics
    print_report(&report);

    Ok(())
}
