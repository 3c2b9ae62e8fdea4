use async_trait::async_trait;
use ferrous_resolve_domain::{DnsResponse, DomainError, Hostname, RecordType};
use std::net::Ipv4Addr;

/// Sends one question to one nameserver and hands back the decoded reply.
///
/// Implementations keep no state between calls and never retry. Failures of
/// the exchange itself come back as `Err`; what to do with them is the
/// caller's decision.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn query(
        &self,
        name: &Hostname,
        server: Ipv4Addr,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError>;
}
