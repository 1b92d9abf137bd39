use async_trait::async_trait;
use pnet::util::MacAddr;

use crate::error::EnumerationError;
use crate::network::interface::AddressEntry;

/// Source of the host's interface-address list.
pub trait AddressSource {
    /// Returns every address entry in the order the OS reports them.
    fn interface_addresses(&self) -> Result<Vec<AddressEntry>, EnumerationError>;
}

/// Looks up the hardware address bound to an interface name.
pub trait HardwareAddressResolver {
    /// `None` when the query fails or the interface has no hardware address.
    fn hardware_address(&self, name: &str) -> Option<MacAddr>;
}

/// Decides whether the host has outbound connectivity.
#[async_trait]
pub trait ReachabilityProber: Send + Sync {
    async fn probe(&self) -> bool;
}
