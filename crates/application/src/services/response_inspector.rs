//! Pure classification of a nameserver reply.
//!
//! Each extractor scans exactly one section and returns the first record of
//! the right shape, in the order the server sent them. Nothing is sorted or
//! preferred beyond that. A missing record is `None`, never an error.

use ferrous_resolve_domain::{DnsRecord, DnsResponse, Hostname};
use std::net::Ipv4Addr;

/// What a reply tells the resolver to do next, strongest signal first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseClassification<'a> {
    /// An A record in the answer section. Resolution is done.
    Address {
        record: &'a DnsRecord,
        address: Ipv4Addr,
    },

    /// The name is an alias; resolve the target from the bootstrap server.
    CanonicalName {
        record: &'a DnsRecord,
        target: Hostname,
    },

    /// An A record in the additional section for a delegated nameserver.
    Glue {
        record: &'a DnsRecord,
        address: Ipv4Addr,
    },

    /// An NS delegation without a usable address.
    Referral {
        record: &'a DnsRecord,
        nameserver: Hostname,
    },

    /// Nothing left to follow.
    Exhausted,
}

impl<'a> ResponseClassification<'a> {
    pub fn record(&self) -> Option<&'a DnsRecord> {
        match self {
            Self::Address { record, .. }
            | Self::CanonicalName { record, .. }
            | Self::Glue { record, .. }
            | Self::Referral { record, .. } => Some(record),
            Self::Exhausted => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Address { .. } => "address",
            Self::CanonicalName { .. } => "cname",
            Self::Glue { .. } => "glue",
            Self::Referral { .. } => "referral",
            Self::Exhausted => "exhausted",
        }
    }
}

pub struct ResponseInspector;

impl ResponseInspector {
    pub fn extract_address(response: &DnsResponse) -> Option<Ipv4Addr> {
        first_match(response.answers(), DnsRecord::ipv4).map(|(_, address)| address)
    }

    pub fn extract_glue_address(response: &DnsResponse) -> Option<Ipv4Addr> {
        first_match(response.additional(), DnsRecord::ipv4).map(|(_, address)| address)
    }

    pub fn extract_cname(response: &DnsResponse) -> Option<Hostname> {
        first_match(response.answers(), |r| r.cname_target().cloned()).map(|(_, target)| target)
    }

    pub fn extract_referred_nameserver(response: &DnsResponse) -> Option<Hostname> {
        first_match(response.authority(), |r| r.nameserver().cloned()).map(|(_, ns)| ns)
    }

    /// Address, then CNAME, then glue, then NS name.
    pub fn classify(response: &DnsResponse) -> ResponseClassification<'_> {
        if let Some((record, address)) = first_match(response.answers(), DnsRecord::ipv4) {
            return ResponseClassification::Address { record, address };
        }

        if let Some((record, target)) =
            first_match(response.answers(), |r| r.cname_target().cloned())
        {
            return ResponseClassification::CanonicalName { record, target };
        }

        if let Some((record, address)) = first_match(response.additional(), DnsRecord::ipv4) {
            return ResponseClassification::Glue { record, address };
        }

        if let Some((record, nameserver)) =
            first_match(response.authority(), |r| r.nameserver().cloned())
        {
            return ResponseClassification::Referral { record, nameserver };
        }

        ResponseClassification::Exhausted
    }
}

fn first_match<'a, T>(
    records: &'a [DnsRecord],
    pick: impl Fn(&'a DnsRecord) -> Option<T>,
) -> Option<(&'a DnsRecord, T)> {
    records
        .iter()
        .find_map(|record| pick(record).map(|value| (record, value)))
}
