//! Ferrous Resolve Domain Layer
pub mod config;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod hostname;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError, ResolverConfig, TransportFailurePolicy};
pub use dns_record::{DnsRecord, RecordData, RecordType};
pub use dns_response::DnsResponse;
pub use errors::DomainError;
pub use hostname::Hostname;
pub use resolution::Resolution;
