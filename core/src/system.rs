use std::net::SocketAddrV4;

use nix::ifaddrs::getifaddrs;
use nix::net::if_::InterfaceFlags;
use pnet::util::MacAddr;

use netprobe_common::error::EnumerationError;
use netprobe_common::network::interface::{AddressEntry, EntryAddress};
use netprobe_common::system::{AddressSource, HardwareAddressResolver};

#[cfg(target_os = "linux")]
use linux_impl::query_hardware_address;
#[cfg(not(target_os = "linux"))]
use link_layer_impl::query_hardware_address;

/// The running host's interfaces, read straight from the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl AddressSource for SystemInterfaces {
    fn interface_addresses(&self) -> Result<Vec<AddressEntry>, EnumerationError> {
        // The list is freed when the iterator drops.
        let addrs = getifaddrs().map_err(|errno| EnumerationError::AddressList(errno.into()))?;

        let entries = addrs
            .map(|ifa| {
                let address = ifa.address.as_ref().map(|storage| match storage.as_sockaddr_in() {
                    Some(sin) => EntryAddress::Ipv4(*SocketAddrV4::from(*sin).ip()),
                    None => EntryAddress::Other,
                });
                let loopback = ifa.flags.contains(InterfaceFlags::IFF_LOOPBACK);
                AddressEntry::new(ifa.interface_name, address, loopback)
            })
            .collect();

        Ok(entries)
    }
}

impl HardwareAddressResolver for SystemInterfaces {
    fn hardware_address(&self, name: &str) -> Option<MacAddr> {
        query_hardware_address(name)
    }
}

#[cfg(target_os = "linux")]
mod linux_impl {
    use std::os::fd::AsRawFd;

    use nix::sys::socket::{AddressFamily, SockFlag, SockType, socket};
    use pnet::util::MacAddr;

    nix::ioctl_read_bad!(siocgifhwaddr, libc::SIOCGIFHWADDR, libc::ifreq);

    /// Asks the kernel for the interface's hardware address through a
    /// throwaway datagram socket.
    pub fn query_hardware_address(name: &str) -> Option<MacAddr> {
        let sock = socket(AddressFamily::Inet, SockType::Datagram, SockFlag::empty(), None).ok()?;
        let mut request = interface_request(name);

        // SAFETY: `request` is a valid ifreq and outlives the call.
        unsafe { siocgifhwaddr(sock.as_raw_fd(), &mut request) }.ok()?;

        // SAFETY: a successful SIOCGIFHWADDR fills the hwaddr member of the union.
        let data = unsafe { request.ifr_ifru.ifru_hwaddr.sa_data };
        let mut octets = [0u8; 6];
        for (octet, byte) in octets.iter_mut().zip(data.iter()) {
            *octet = *byte as u8;
        }
        Some(MacAddr::from(octets))
    }

    fn interface_request(name: &str) -> libc::ifreq {
        // SAFETY: ifreq is plain data; all zeroes is a valid value.
        let mut request: libc::ifreq = unsafe { std::mem::zeroed() };
        // Keep the trailing NUL.
        let name_bytes = name.bytes().take(libc::IFNAMSIZ - 1);
        for (dst, src) in request.ifr_name.iter_mut().zip(name_bytes) {
            *dst = src as libc::c_char;
        }
        request
    }
}

#[cfg(not(target_os = "linux"))]
mod link_layer_impl {
    use nix::ifaddrs::getifaddrs;
    use pnet::util::MacAddr;

    /// BSD-style systems expose the hardware address as the interface's
    /// `AF_LINK` entry, so this runs a second, name-filtered listing.
    pub fn query_hardware_address(name: &str) -> Option<MacAddr> {
        getifaddrs()
            .ok()?
            .filter(|ifa| ifa.interface_name == name)
            .find_map(|ifa| ifa.address.as_ref()?.as_link_addr()?.addr())
            .map(MacAddr::from)
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
