use crate::ports::{DnsTransport, ResolutionObserver};
use crate::services::{ResponseClassification, ResponseInspector};
use ferrous_resolve_domain::{
    DnsRecord, DnsResponse, DomainError, Hostname, RecordType, Resolution, ResolverConfig,
    TransportFailurePolicy,
};
use futures::future::{BoxFuture, FutureExt};
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Iterative resolution of a hostname to an IPv4 address.
///
/// Every name starts at the bootstrap server. Answers are followed in the
/// order address, CNAME, glue, NS name; CNAME targets and NS names are
/// resolved as independent lookups that again start at the bootstrap server.
pub struct ResolveHostnameUseCase {
    transport: Arc<dyn DnsTransport>,
    observer: Option<Arc<dyn ResolutionObserver>>,
    bootstrap_server: Ipv4Addr,
    hop_limit: Option<u32>,
    transport_failure: TransportFailurePolicy,
}

/// Query budget shared by a top-level lookup and all of its sub-lookups.
struct HopBudget {
    used: u32,
    limit: Option<u32>,
}

impl HopBudget {
    fn new(limit: Option<u32>) -> Self {
        Self { used: 0, limit }
    }

    fn spend(&mut self, name: &Hostname) -> Result<(), DomainError> {
        if let Some(limit) = self.limit {
            if self.used >= limit {
                return Err(DomainError::HopLimitExceeded {
                    name: name.to_string(),
                    limit,
                });
            }
        }
        self.used += 1;
        Ok(())
    }
}

impl ResolveHostnameUseCase {
    pub fn new(transport: Arc<dyn DnsTransport>, config: &ResolverConfig) -> Self {
        Self {
            transport,
            observer: None,
            bootstrap_server: config.bootstrap_server,
            hop_limit: config.hop_limit(),
            transport_failure: config.transport_failure,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn bootstrap_server(&self) -> Ipv4Addr {
        self.bootstrap_server
    }

    pub async fn execute(&self, name: &Hostname) -> Result<Resolution, DomainError> {
        let mut budget = HopBudget::new(self.hop_limit);

        let address = self
            .resolve_from_bootstrap(name.clone(), &mut budget)
            .await?;

        info!(
            domain = %name,
            address = %address,
            queries = budget.used,
            "Resolution complete"
        );

        Ok(Resolution::new(name.clone(), address, budget.used))
    }

    fn resolve_from_bootstrap<'a>(
        &'a self,
        name: Hostname,
        budget: &'a mut HopBudget,
    ) -> BoxFuture<'a, Result<Ipv4Addr, DomainError>> {
        async move {
            let mut server = self.bootstrap_server;
            // A server asked twice about the same name would answer the same way.
            let mut visited: HashSet<Ipv4Addr> = HashSet::new();

            loop {
                if !visited.insert(server) {
                    return Err(DomainError::ReferralLoop {
                        name: name.to_string(),
                        server,
                    });
                }

                let response = self.query(&name, server, budget).await?;

                let classification = ResponseInspector::classify(&response);
                debug!(
                    domain = %name,
                    server = %server,
                    step = classification.kind(),
                    "Response classified"
                );
                if let Some(record) = classification.record() {
                    self.report(record);
                }

                match classification {
                    ResponseClassification::Address { address, .. } => {
                        return Ok(address);
                    }
                    ResponseClassification::CanonicalName { target, .. } => {
                        info!(domain = %name, target = %target, "Following CNAME from bootstrap");
                        return self.resolve_from_bootstrap(target, budget).await;
                    }
                    ResponseClassification::Glue { address, .. } => {
                        debug!(domain = %name, next = %address, "Following glue record");
                        server = address;
                    }
                    ResponseClassification::Referral { nameserver, .. } => {
                        info!(
                            domain = %name,
                            nameserver = %nameserver,
                            "Referral without glue, resolving nameserver"
                        );
                        server = self.resolve_from_bootstrap(nameserver, budget).await?;
                    }
                    ResponseClassification::Exhausted => {
                        return Err(DomainError::NoAddressRecord {
                            name: name.to_string(),
                        });
                    }
                }
            }
        }
        .boxed()
    }

    async fn query(
        &self,
        name: &Hostname,
        server: Ipv4Addr,
        budget: &mut HopBudget,
    ) -> Result<DnsResponse, DomainError> {
        budget.spend(name)?;

        debug!(domain = %name, server = %server, hop = budget.used, "Querying nameserver");
        if let Some(observer) = &self.observer {
            observer.query_sent(name, server);
        }

        match self.transport.query(name, server, RecordType::A).await {
            Ok(response) => Ok(response),
            Err(e) => {
                if let Some(observer) = &self.observer {
                    observer.transport_failed(name, server, &e);
                }
                match self.transport_failure {
                    TransportFailurePolicy::TreatAsEmpty => {
                        warn!(
                            error = %e,
                            domain = %name,
                            server = %server,
                            "Query failed, continuing with an empty response"
                        );
                        Ok(DnsResponse::empty())
                    }
                    TransportFailurePolicy::Abort => Err(e),
                }
            }
        }
    }

    fn report(&self, record: &DnsRecord) {
        debug!(record = %record, "Record inspected");
        if let Some(observer) = &self.observer {
            observer.record_inspected(record);
        }
    }
}
