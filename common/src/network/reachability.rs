use std::fmt;

/// Outcome of the reachability probe.
///
/// Starts out as [`Reachability::Unavailable`] and is only upgraded by a probe
/// that completed its handshake in time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Available,
    #[default]
    Unavailable,
}

impl Reachability {
    pub fn is_available(self) -> bool {
        self == Reachability::Available
    }
}

impl From<bool> for Reachability {
    fn from(connected: bool) -> Self {
        if connected {
            Reachability::Available
        } else {
            Reachability::Unavailable
        }
    }
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reachability::Available => f.write_str("Available"),
            Reachability::Unavailable => f.write_str("Unavailable"),
        }
    }
}
