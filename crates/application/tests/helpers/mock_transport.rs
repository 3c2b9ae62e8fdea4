#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_resolve_application::ports::{DnsTransport, ResolutionObserver};
use ferrous_resolve_domain::{DnsRecord, DnsResponse, DomainError, Hostname, RecordType};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

pub fn host(name: &str) -> Hostname {
    Hostname::parse(name).unwrap()
}

pub fn ip(addr: &str) -> Ipv4Addr {
    Ipv4Addr::from_str(addr).unwrap()
}

/// Scripted nameservers: each (name, server) pair answers with a fixed reply.
/// Unscripted pairs answer with an empty response.
#[derive(Clone, Default)]
pub struct MockDnsTransport {
    responses: Arc<Mutex<HashMap<(String, Ipv4Addr), Result<DnsResponse, DomainError>>>>,
    queries: Arc<Mutex<Vec<(String, Ipv4Addr, RecordType)>>>,
}

impl MockDnsTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, server: &str, response: DnsResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert((host(name).to_string(), ip(server)), Ok(response));
    }

    pub fn set_error(&self, name: &str, server: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert((host(name).to_string(), ip(server)), Err(error));
    }

    /// Every query sent so far, in order, as (name, server).
    pub fn queries(&self) -> Vec<(String, Ipv4Addr)> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|(name, server, _)| (name.clone(), *server))
            .collect()
    }

    pub fn record_types(&self) -> Vec<RecordType> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, rt)| *rt)
            .collect()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsTransport for MockDnsTransport {
    async fn query(
        &self,
        name: &Hostname,
        server: Ipv4Addr,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        self.queries
            .lock()
            .unwrap()
            .push((name.to_string(), server, record_type));

        self.responses
            .lock()
            .unwrap()
            .get(&(name.to_string(), server))
            .cloned()
            .unwrap_or_else(|| Ok(DnsResponse::empty()))
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    records: Mutex<Vec<String>>,
    queries: Mutex<Vec<(String, Ipv4Addr)>>,
    failures: Mutex<Vec<Ipv4Addr>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<(String, Ipv4Addr)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<Ipv4Addr> {
        self.failures.lock().unwrap().clone()
    }
}

impl ResolutionObserver for RecordingObserver {
    fn query_sent(&self, name: &Hostname, server: Ipv4Addr) {
        self.queries.lock().unwrap().push((name.to_string(), server));
    }

    fn record_inspected(&self, record: &DnsRecord) {
        self.records.lock().unwrap().push(record.to_string());
    }

    fn transport_failed(&self, _name: &Hostname, server: Ipv4Addr, _error: &DomainError) {
        self.failures.lock().unwrap().push(server);
    }
}

pub fn a_answer(owner: &str, addr: &str) -> DnsResponse {
    DnsResponse::empty().with_answer(DnsRecord::a(owner, 300, ip(addr)))
}

pub fn cname_answer(owner: &str, target: &str) -> DnsResponse {
    DnsResponse::empty().with_answer(DnsRecord::cname(owner, 300, host(target)))
}

pub fn referral_with_glue(zone: &str, nameserver: &str, addr: &str) -> DnsResponse {
    DnsResponse::empty()
        .with_authority(DnsRecord::ns(zone, 172800, host(nameserver)))
        .with_additional(DnsRecord::a(nameserver, 172800, ip(addr)))
}

pub fn referral_without_glue(zone: &str, nameserver: &str) -> DnsResponse {
    DnsResponse::empty().with_authority(DnsRecord::ns(zone, 172800, host(nameserver)))
}
