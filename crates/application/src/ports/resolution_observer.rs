use ferrous_resolve_domain::{DnsRecord, DomainError, Hostname};
use std::net::Ipv4Addr;

/// Receives progress events from a resolution as they happen.
pub trait ResolutionObserver: Send + Sync {
    fn query_sent(&self, _name: &Hostname, _server: Ipv4Addr) {}

    /// Called once for every record that decided the next step.
    fn record_inspected(&self, record: &DnsRecord);

    fn transport_failed(&self, _name: &Hostname, _server: Ipv4Addr, _error: &DomainError) {}
}
