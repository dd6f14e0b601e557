/// Discovery of the LAN address used to reach the installer.
use std::net::IpAddr;

/// Returns the first non-loopback IPv4 address of this host, or
/// "localhost" when no such interface exists.
pub fn local_ip() -> String {
    if_addrs::get_if_addrs()
        .unwrap_or_default()
        .iter()
        .find_map(|iface| {
            if iface.is_loopback() {
                return None;
            }
            match iface.ip() {
                IpAddr::V4(addr) => Some(addr.to_string()),
                IpAddr::V6(_) => None,
            }
        })
        .unwrap_or_else(|| "localhost".into())
}
