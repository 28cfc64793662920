//! Runner configuration: command-line flags, each with an environment fallback.

use std::path::PathBuf;

use gildedrose_observability::LogFormat;

/// Report format written to stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `name, sellIn, quality` lines under a `-------- day N --------` banner.
    #[default]
    Text,
    /// One JSON array of `{ day, items }` snapshots.
    Json,
}

#[derive(Debug, Clone, clap::Parser)]
#[command(
    name = "gildedrose-fixture",
    version,
    about = "Print the shop inventory as it ages day by day"
)]
pub struct Config {
    /// Number of days to simulate after day 0.
    #[arg(short, long, env = "GILDEDROSE_DAYS", default_value_t = 2)]
    pub days: u32,

    /// JSON file holding an array of items. The classic inventory is used when omitted.
    #[arg(short, long, env = "GILDEDROSE_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Report format.
    #[arg(long, env = "GILDEDROSE_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log format (logs go to stderr; verbosity via RUST_LOG).
    #[arg(long, env = "GILDEDROSE_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days: 2,
            fixture: None,
            format: OutputFormat::default(),
            log_format: LogFormat::default(),
        }
    }
}
