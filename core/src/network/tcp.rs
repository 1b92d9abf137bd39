use std::future::Future;
use std::io;
use std::net::{SocketAddr, SocketAddrV4};
use std::time::Duration;

use async_trait::async_trait;
use netprobe_common::config::Config;
use netprobe_common::system::ReachabilityProber;
use tokio::net::{TcpSocket, TcpStream};
use tokio::time::timeout;
use tracing::{debug, error};

/// Reachability prober that completes a TCP handshake with a fixed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpProber {
    pub target: SocketAddrV4,
    pub timeout: Duration,
}

impl TcpProber {
    pub fn new(target: SocketAddrV4, timeout: Duration) -> Self {
        Self { target, timeout }
    }
}

impl From<&Config> for TcpProber {
    fn from(cfg: &Config) -> Self {
        Self::new(cfg.probe_target, cfg.probe_timeout)
    }
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[async_trait]
impl ReachabilityProber for TcpProber {
    async fn probe(&self) -> bool {
        probe_endpoint(self.target, self.timeout).await
    }
}

/// Connects to `target` without blocking and reports whether the handshake
/// finished cleanly within `wait`.
///
/// A timeout and a refused connection both come back as `false`. The socket
/// is closed before returning on every path.
pub async fn probe_endpoint(target: SocketAddrV4, wait: Duration) -> bool {
    // Non-blocking from the start, the runtime drives EINPROGRESS and the
    // writable-readiness wait.
    let socket: TcpSocket = match TcpSocket::new_v4() {
        Ok(socket) => socket,
        Err(e) => {
            error!("Failed to create probe socket: {e}");
            return false;
        }
    };

    await_handshake(target, wait, socket.connect(SocketAddr::V4(target))).await
}

/// Waits at most `wait` for `connecting` to finish and checks the socket's
/// pending error once it has.
async fn await_handshake<F>(target: SocketAddrV4, wait: Duration, connecting: F) -> bool
where
    F: Future<Output = io::Result<TcpStream>>,
{
    match timeout(wait, connecting).await {
        Ok(Ok(stream)) => match stream.take_error() {
            Ok(None) => true,
            Ok(Some(e)) | Err(e) => {
                debug!("Connection to {target} reported a pending error: {e}");
                false
            }
        },
        Ok(Err(e)) => {
            debug!("Connection to {target} failed: {e}");
            false
        }
        Err(_elapsed) => {
            debug!("Connection to {target} timed out after {:.1}s", wait.as_secs_f64());
            false
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
