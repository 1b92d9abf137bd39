//! One diagnostics pass: interface report plus reachability verdict.
//!
//! The probe runs as a detached task while the interface section is written.
//! Its verdict comes back over a oneshot channel which the report waits on for
//! at most [`Config::report_wait`], so a slow probe can delay the last line but
//! never the interface list.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use netprobe_common::config::Config;
use netprobe_common::network::interface::InterfaceRecord;
use netprobe_common::network::reachability::Reachability;
use netprobe_common::system::{AddressSource, HardwareAddressResolver, ReachabilityProber};
use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::interfaces;
use crate::network::tcp::TcpProber;
use crate::report::{self, ReportStyle};
use crate::system::SystemInterfaces;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsReport {
    pub interfaces: Vec<InterfaceRecord>,
    pub internet: Reachability,
}

/// Runs a pass against the host itself and writes the report to `out`.
pub async fn run_system<W: Write>(
    cfg: &Config,
    out: &mut W,
    style: ReportStyle,
) -> io::Result<DiagnosticsReport> {
    let prober: Arc<dyn ReachabilityProber> = Arc::new(TcpProber::from(cfg));
    run(&SystemInterfaces, &SystemInterfaces, prober, cfg, out, style).await
}

pub async fn run<S, R, W>(
    source: &S,
    resolver: &R,
    prober: Arc<dyn ReachabilityProber>,
    cfg: &Config,
    out: &mut W,
    style: ReportStyle,
) -> io::Result<DiagnosticsReport>
where
    S: AddressSource + ?Sized,
    R: HardwareAddressResolver + ?Sized,
    W: Write,
{
    let interfaces: Vec<InterfaceRecord> = interfaces::enumerate(source, resolver);
    debug!("Enumerated {} reportable interface(s)", interfaces.len());

    let pending = spawn_probe(prober);

    report::write_interfaces(out, &interfaces)?;
    out.flush()?;

    let internet: Reachability = await_verdict(pending, cfg.report_wait).await;
    report::write_reachability(out, internet, style)?;
    out.flush()?;

    Ok(DiagnosticsReport {
        interfaces,
        internet,
    })
}

/// Starts the probe on its own task. The join handle is dropped on purpose:
/// nothing joins or cancels the task, only the receiver is kept.
fn spawn_probe(prober: Arc<dyn ReachabilityProber>) -> oneshot::Receiver<bool> {
    let (tx, rx) = oneshot::channel::<bool>();
    tokio::spawn(async move {
        let connected: bool = prober.probe().await;
        // The report may have given up already.
        let _ = tx.send(connected);
    });
    rx
}

async fn await_verdict(pending: oneshot::Receiver<bool>, wait: Duration) -> Reachability {
    match timeout(wait, pending).await {
        Ok(Ok(connected)) => Reachability::from(connected),
        Ok(Err(_)) => {
            warn!("Reachability probe ended without a result");
            Reachability::Unavailable
        }
        Err(_elapsed) => {
            warn!(
                "No reachability result after {:.1}s, reporting it as unavailable",
                wait.as_secs_f64()
            );
            Reachability::Unavailable
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
