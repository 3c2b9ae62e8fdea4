#![allow(dead_code)]
use ferrous_resolve_domain::{DnsRecord, DnsResponse, Hostname};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn host(name: &str) -> Hostname {
    Hostname::parse(name).unwrap()
}

pub struct DnsResponseBuilder {
    response: DnsResponse,
    ttl: u32,
}

impl DnsResponseBuilder {
    pub fn new() -> Self {
        Self {
            response: DnsResponse::empty(),
            ttl: 300,
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn answer_a(mut self, owner: &str, ip: &str) -> Self {
        let record = DnsRecord::a(owner, self.ttl, Ipv4Addr::from_str(ip).unwrap());
        self.response = self.response.with_answer(record);
        self
    }

    pub fn answer_cname(mut self, owner: &str, target: &str) -> Self {
        let record = DnsRecord::cname(owner, self.ttl, host(target));
        self.response = self.response.with_answer(record);
        self
    }

    pub fn authority_ns(mut self, zone: &str, nameserver: &str) -> Self {
        let record = DnsRecord::ns(zone, self.ttl, host(nameserver));
        self.response = self.response.with_authority(record);
        self
    }

    pub fn glue(mut self, nameserver: &str, ip: &str) -> Self {
        let record = DnsRecord::a(nameserver, self.ttl, Ipv4Addr::from_str(ip).unwrap());
        self.response = self.response.with_additional(record);
        self
    }

    pub fn build(self) -> DnsResponse {
        self.response
    }
}
