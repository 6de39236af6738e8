use clap::{Parser, ValueEnum};

use gildedrose_observability::LogFormat;

/// Snapshots printed when no day count is given (days 0 through 4).
pub const DEFAULT_SNAPSHOTS: u64 = 5;

#[derive(Debug, Parser)]
#[command(name = "gildedrose")]
#[command(about = "Print daily inventory snapshots while items age.")]
pub struct CommandLine {
    /// Last day to print (prints days 0 through DAYS)
    #[arg(env = "GILDEDROSE_DAYS")]
    pub days: Option<u32>,

    /// Snapshot output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log line format (pretty|json); filter with RUST_LOG
    #[arg(long, env = "GILDEDROSE_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one `name, sellIn, quality` line per item
    Text,
    /// One JSON object per day
    Json,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Number of snapshots to print.
    pub fn snapshots(&self) -> u64 {
        match self.days {
            Some(days) => u64::from(days) + 1,
            None => DEFAULT_SNAPSHOTS,
        }
    }
}
