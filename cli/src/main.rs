mod commands;
mod terminal;

use commands::{CommandLine, diagnose};
use netprobe_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.log_level());

    let cfg = Config::default();
    diagnose::diagnose(&cfg).await;
    Ok(())
}
