use super::record_type_map::RecordTypeMapper;
use ferrous_resolve_domain::{DnsRecord, DnsResponse, DomainError, Hostname, RecordData};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{Name, RData, Record};
use tracing::debug;

/// A decoded reply plus the header fields the transport still needs.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub response: DnsResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Received a query where a response was expected".to_string(),
            ));
        }

        let answers = Self::convert_section(message.answers())?;
        let authority = Self::convert_section(message.name_servers())?;
        let additional = Self::convert_section(message.additionals())?;

        let rcode = message.response_code();

        debug!(
            id = message.id(),
            rcode = Self::rcode_to_status(rcode),
            answers = answers.len(),
            authority = authority.len(),
            additional = additional.len(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            rcode,
            response: DnsResponse::new(answers, authority, additional),
        })
    }

    fn convert_section(records: &[Record]) -> Result<Vec<DnsRecord>, DomainError> {
        records.iter().map(Self::convert_record).collect()
    }

    fn convert_record(record: &Record) -> Result<DnsRecord, DomainError> {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::CNAME(canonical) => RecordData::Cname(Self::to_hostname(&canonical.0)?),
            RData::NS(ns) => RecordData::Ns(Self::to_hostname(&ns.0)?),
            _ => RecordData::Other(RecordTypeMapper::mnemonic(record.record_type()).into()),
        };

        Ok(DnsRecord::new(record.name().to_ascii(), record.ttl(), data))
    }

    // Punycode form, so label lengths match the wire.
    fn to_hostname(name: &Name) -> Result<Hostname, DomainError> {
        Hostname::parse(&name.to_ascii()).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Unusable name in record data: {}", e))
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
