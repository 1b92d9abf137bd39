use netprobe_common::network::interface::{AddressEntry, InterfaceRecord};
use netprobe_common::system::{AddressSource, HardwareAddressResolver};
use tracing::{error, trace};

/// Why an address entry did not become a record.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Exclusion {
    /// The entry carries no address at all.
    NoAddress,
    /// The interface is flagged loopback.
    Loopback,
    /// The entry is bound to a family other than IPv4.
    NoIpv4,
    /// The hardware address query failed.
    NoMacAddress,
}

/// Turns the OS address list into interface records, in the order the OS
/// reported them.
///
/// An interface with several IPv4 addresses yields one record per address.
/// If the address list itself can't be read the failure is logged and the
/// result is empty.
pub fn enumerate<S, R>(source: &S, resolver: &R) -> Vec<InterfaceRecord>
where
    S: AddressSource + ?Sized,
    R: HardwareAddressResolver + ?Sized,
{
    let entries: Vec<AddressEntry> = match source.interface_addresses() {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to enumerate network interfaces: {e}");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            let name = entry.name.clone();
            match to_record(entry, resolver) {
                Ok(record) => Some(record),
                Err(reason) => {
                    trace!("Skipping address entry of {name}: {reason:?}");
                    None
                }
            }
        })
        .collect()
}

fn to_record<R>(entry: AddressEntry, resolver: &R) -> Result<InterfaceRecord, Exclusion>
where
    R: HardwareAddressResolver + ?Sized,
{
    if entry.address.is_none() {
        return Err(Exclusion::NoAddress);
    }
    if entry.loopback {
        return Err(Exclusion::Loopback);
    }

    // Queried for every surviving entry, whatever its family.
    let mac = resolver.hardware_address(&entry.name);
    let ipv4 = entry.ipv4().ok_or(Exclusion::NoIpv4)?;
    let mac = mac.ok_or(Exclusion::NoMacAddress)?;

    Ok(InterfaceRecord::new(entry.name, ipv4, mac))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
