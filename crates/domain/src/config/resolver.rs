use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

pub const DEFAULT_BOOTSTRAP_SERVER: Ipv4Addr = Ipv4Addr::new(8, 8, 8, 8);
pub const DEFAULT_DNS_PORT: u16 = 53;
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 2000;
pub const DEFAULT_MAX_HOPS: u32 = 64;

/// What the resolver does when a single query fails at the transport level.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransportFailurePolicy {
    /// Continue as if the server had replied with an empty message.
    #[default]
    TreatAsEmpty,

    /// Stop resolving and surface the transport error.
    Abort,
}

impl TransportFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TreatAsEmpty => "treat_as_empty",
            Self::Abort => "abort",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// First server asked for every name, and again for every CNAME or
    /// NS target.
    #[serde(default = "default_bootstrap_server")]
    pub bootstrap_server: Ipv4Addr,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_true")]
    pub recursion_desired: bool,

    /// Query budget for one resolution, sub-resolutions included. 0 disables
    /// the limit.
    #[serde(default = "default_max_hops")]
    pub max_hops: u32,

    #[serde(default)]
    pub transport_failure: TransportFailurePolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            bootstrap_server: default_bootstrap_server(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            recursion_desired: default_true(),
            max_hops: default_max_hops(),
            transport_failure: TransportFailurePolicy::default(),
        }
    }
}

impl ResolverConfig {
    pub fn with_bootstrap_server(mut self, server: Ipv4Addr) -> Self {
        self.bootstrap_server = server;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.query_timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_hops(mut self, max_hops: u32) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub fn with_transport_failure(mut self, policy: TransportFailurePolicy) -> Self {
        self.transport_failure = policy;
        self
    }

    pub fn hop_limit(&self) -> Option<u32> {
        (self.max_hops > 0).then_some(self.max_hops)
    }
}

fn default_bootstrap_server() -> Ipv4Addr {
    DEFAULT_BOOTSTRAP_SERVER
}

fn default_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_query_timeout_ms() -> u64 {
    DEFAULT_QUERY_TIMEOUT_MS
}

fn default_max_hops() -> u32 {
    DEFAULT_MAX_HOPS
}

fn default_true() -> bool {
    true
}
