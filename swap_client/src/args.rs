//! Command-line arguments for the Swap Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use swap_common::net::DEFAULT_FEED_URL;
use swap_common::DedupPolicy;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Endpoint returning the JSON list of price quotes.
    #[clap(long, default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// How duplicate quotes for one currency are combined.
    #[clap(long, value_enum, default_value_t = DedupPolicy::RunningPairwise)]
    pub dedup: DedupPolicy,

    /// Source currency for a one-shot conversion.
    #[clap(long)]
    pub from: Option<String>,

    /// Target currency for a one-shot conversion.
    #[clap(long)]
    pub to: Option<String>,

    /// Amount to convert in one-shot mode.
    #[clap(long)]
    pub amount: Option<String>,
}

impl Args {
    /// Returns `true` when any one-shot field was given on the command line.
    pub fn is_one_shot(&self) -> bool {
        self.from.is_some() || self.to.is_some() || self.amount.is_some()
    }
}
