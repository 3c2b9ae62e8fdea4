mod dns_transport;
mod resolution_observer;

pub use dns_transport::DnsTransport;
pub use resolution_observer::ResolutionObserver;

// Re-export for convenience
pub use ferrous_resolve_domain::{DnsResponse, Hostname, RecordType};
