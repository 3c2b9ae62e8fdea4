use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::udp::UdpTransport;
use async_trait::async_trait;
use ferrous_resolve_application::ports::DnsTransport;
use ferrous_resolve_domain::{DnsResponse, DomainError, Hostname, RecordType, ResolverConfig};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Sends one query per call over UDP and decodes the reply.
pub struct DnsForwarder {
    port: u16,
    timeout: Duration,
    recursion_desired: bool,
}

impl DnsForwarder {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            port: config.port,
            timeout: Duration::from_millis(config.query_timeout_ms),
            recursion_desired: config.recursion_desired,
        }
    }
}

#[async_trait]
impl DnsTransport for DnsForwarder {
    async fn query(
        &self,
        name: &Hostname,
        server: Ipv4Addr,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let server_addr = SocketAddr::new(IpAddr::V4(server), self.port);

        let (id, request_bytes) =
            MessageBuilder::build_query(name, &record_type, self.recursion_desired)?;

        debug!(
            domain = %name,
            record_type = %record_type,
            server = %server_addr,
            id = id,
            "Sending query"
        );

        let reply = UdpTransport::new(server_addr)
            .send(&request_bytes, self.timeout)
            .await?;

        let parsed = ResponseParser::parse(&reply)?;

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "ID mismatch from {}: sent {:#06x}, received {:#06x}",
                server_addr, id, parsed.id
            )));
        }

        debug!(
            domain = %name,
            server = %server_addr,
            rcode = ResponseParser::rcode_to_status(parsed.rcode),
            "Reply accepted"
        );

        Ok(parsed.response)
    }
}
