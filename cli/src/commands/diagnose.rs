use std::io::{self, IsTerminal};

use netprobe_common::config::Config;
use netprobe_core::diagnostics;
use netprobe_core::report::ReportStyle;
use tracing::{error, info};

/// Prints the interface report followed by the internet access verdict.
///
/// Never fails: problems are logged and the report degrades to empty/unavailable.
pub async fn diagnose(cfg: &Config) {
    let stdout = io::stdout();
    let style = ReportStyle::for_terminal(stdout.is_terminal());
    let mut out = stdout.lock();

    match diagnostics::run_system(cfg, &mut out, style).await {
        Ok(report) => info!(
            "Reported {} interface(s), internet access {}",
            report.interfaces.len(),
            report.internet
        ),
        Err(e) => error!("Failed to write report: {e}"),
    }
}
