use super::RecordType;
use crate::Hostname;
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Typed payload of a resource record.
///
/// Only the shapes the resolver acts on are decoded; anything else keeps its
/// type mnemonic so it can still be traced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Cname(Hostname),
    Ns(Hostname),
    Other(Arc<str>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: Arc<str>,

    pub ttl: u32,

    pub data: RecordData,
}

impl DnsRecord {
    pub fn new(name: impl Into<Arc<str>>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn a(name: impl Into<Arc<str>>, ttl: u32, address: Ipv4Addr) -> Self {
        Self::new(name, ttl, RecordData::A(address))
    }

    pub fn cname(name: impl Into<Arc<str>>, ttl: u32, target: Hostname) -> Self {
        Self::new(name, ttl, RecordData::Cname(target))
    }

    pub fn ns(name: impl Into<Arc<str>>, ttl: u32, nameserver: Hostname) -> Self {
        Self::new(name, ttl, RecordData::Ns(nameserver))
    }

    /// `None` for records decoded as [`RecordData::Other`] with a mnemonic
    /// outside [`RecordType`].
    pub fn record_type(&self) -> Option<RecordType> {
        match &self.data {
            RecordData::A(_) => Some(RecordType::A),
            RecordData::Cname(_) => Some(RecordType::CNAME),
            RecordData::Ns(_) => Some(RecordType::NS),
            RecordData::Other(mnemonic) => mnemonic.parse().ok(),
        }
    }

    pub fn type_mnemonic(&self) -> &str {
        match &self.data {
            RecordData::A(_) => RecordType::A.as_str(),
            RecordData::Cname(_) => RecordType::CNAME.as_str(),
            RecordData::Ns(_) => RecordType::NS.as_str(),
            RecordData::Other(mnemonic) => mnemonic,
        }
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(address) => Some(address),
            _ => None,
        }
    }

    pub fn cname_target(&self) -> Option<&Hostname> {
        match &self.data {
            RecordData::Cname(target) => Some(target),
            _ => None,
        }
    }

    pub fn nameserver(&self) -> Option<&Hostname> {
        match &self.data {
            RecordData::Ns(nameserver) => Some(nameserver),
            _ => None,
        }
    }
}

// Zone-file presentation: owner, TTL, class, type, data.
impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tIN\t{}",
            self.name,
            self.ttl,
            self.type_mnemonic()
        )?;
        match &self.data {
            RecordData::A(address) => write!(f, "\t{}", address),
            RecordData::Cname(target) => write!(f, "\t{}", target),
            RecordData::Ns(nameserver) => write!(f, "\t{}", nameserver),
            RecordData::Other(_) => Ok(()),
        }
    }
}
