//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_resolve_domain::{DomainError, Hostname, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a single-question query and serialize it.
    ///
    /// Returns the random message ID alongside the bytes so the reply can be
    /// matched against it.
    pub fn build_query(
        name: &Hostname,
        record_type: &RecordType,
        recursion_desired: bool,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(name.as_str()).map_err(|e| {
            DomainError::InvalidHostname(format!("Invalid domain '{}': {}", name, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(hickory_proto::rr::DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(recursion_desired);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Normalize user input to the ASCII form sent on the wire.
    ///
    /// Internationalized labels are punycode-encoded before the length
    /// limits of [`Hostname::parse`] are applied.
    pub fn wire_hostname(input: &str) -> Result<Hostname, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Hostname::parse(trimmed);
        }

        let name = Name::from_utf8(trimmed).map_err(|e| {
            DomainError::InvalidHostname(format!("Invalid domain '{}': {}", trimmed, e))
        })?;

        Hostname::parse(&name.to_ascii())
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
