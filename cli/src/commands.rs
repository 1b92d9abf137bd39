pub mod diagnose;

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "netprobe", version)]
#[command(about = "Lists this host's network interfaces and checks internet access.")]
pub struct CommandLine {
    /// Print more diagnostics (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
