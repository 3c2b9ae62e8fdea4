use crate::Hostname;
use std::net::Ipv4Addr;

/// Successful outcome of resolving one hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub name: Hostname,

    pub address: Ipv4Addr,

    /// Queries sent, sub-resolutions included.
    pub queries: u32,
}

impl Resolution {
    pub fn new(name: Hostname, address: Ipv4Addr, queries: u32) -> Self {
        Self {
            name,
            address,
            queries,
        }
    }
}
