use std::path::PathBuf;

use clap::{ArgAction, Parser};

mod error;
pub use error::ParserError;

/// `fusion-detect <prefix> <minNumberOfPairedEndReads> [OPTIONS]` (§10.4).
#[derive(Parser, Debug)]
#[clap(name = "fusion-detect", author, version, about, long_about = None)]
pub struct Cli {
    /// Non-empty string used to generate candidate ids (`<prefix>_%05d`).
    pub prefix: String,

    /// Minimum number of supporting paired-end reads for a candidate to be emitted.
    pub min_paired_end_reads: u32,

    /// Logging verbosity (-v, -vv, -vvv, ...).
    #[clap(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Seed the Monte Carlo sampler for reproducible runs.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Override the `FUSIONSEQ_CONFPATH` environment variable.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> Result<(), ParserError> {
        if self.prefix.is_empty() {
            return Err(ParserError::EmptyPrefix);
        }
        if self.min_paired_end_reads == 0 {
            return Err(ParserError::ZeroMinPairedEndReads);
        }
        Ok(())
    }
}
