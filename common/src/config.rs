use std::net::{Ipv4Addr, SocketAddrV4};
use std::time::Duration;

/// Public resolver used as the reachability target.
pub const DEFAULT_PROBE_ADDR: Ipv4Addr = Ipv4Addr::new(8, 8, 8, 8);
/// DNS port. Only used as a port that is reliably open, no DNS traffic is exchanged.
pub const DEFAULT_PROBE_PORT: u16 = 53;
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_REPORT_WAIT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint the reachability probe connects to.
    pub probe_target: SocketAddrV4,
    /// Upper bound for the non-blocking connect to resolve.
    pub probe_timeout: Duration,
    /// How long the report waits for the probe's result after the interface
    /// section has been written.
    pub report_wait: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_target: SocketAddrV4::new(DEFAULT_PROBE_ADDR, DEFAULT_PROBE_PORT),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            report_wait: DEFAULT_REPORT_WAIT,
        }
    }
}
