use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("No A record found for {name}")]
    NoAddressRecord { name: String },

    #[error("Gave up on {name} after {limit} queries")]
    HopLimitExceeded { name: String, limit: u32 },

    #[error("Referral loop: {server} was already queried for {name}")]
    ReferralLoop { name: String, server: Ipv4Addr },
}

impl DomainError {
    /// True for failures of the network exchange itself, as opposed to a
    /// server that answered with nothing useful.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::Transport { .. }
                | DomainError::TransportTimeout { .. }
                | DomainError::InvalidDnsResponse(_)
        )
    }
}
