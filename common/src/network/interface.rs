use std::net::Ipv4Addr;

use pnet::util::MacAddr;

/// Address carried by a single OS interface-address entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAddress {
    Ipv4(Ipv4Addr),
    /// Any other family (IPv6, link layer, ...). Not reported, but still
    /// counts as "the entry has an address".
    Other,
}

/// One `(interface, family, address, flags)` tuple as handed out by the OS.
///
/// An interface shows up once per bound address, so the same name usually
/// appears several times in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    pub name: String,
    pub address: Option<EntryAddress>,
    pub loopback: bool,
}

impl AddressEntry {
    pub fn new(name: impl Into<String>, address: Option<EntryAddress>, loopback: bool) -> Self {
        Self {
            name: name.into(),
            address,
            loopback,
        }
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.address {
            Some(EntryAddress::Ipv4(addr)) => Some(addr),
            _ => None,
        }
    }
}

/// A reportable interface: a named, non-loopback binding with both an IPv4
/// address and a resolved hardware address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub name: String,
    pub ipv4: Ipv4Addr,
    pub mac: MacAddr,
}

impl InterfaceRecord {
    pub fn new(name: impl Into<String>, ipv4: Ipv4Addr, mac: MacAddr) -> Self {
        Self {
            name: name.into(),
            ipv4,
            mac,
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
