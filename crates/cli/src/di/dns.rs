use crate::output::StdoutObserver;
use ferrous_resolve_application::use_cases::ResolveHostnameUseCase;
use ferrous_resolve_domain::Config;
use ferrous_resolve_infrastructure::dns::DnsForwarder;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub resolve_hostname: ResolveHostnameUseCase,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let resolver = &config.resolver;

        info!(
            bootstrap = %resolver.bootstrap_server,
            port = resolver.port,
            timeout_ms = resolver.query_timeout_ms,
            max_hops = resolver.max_hops,
            transport_failure = resolver.transport_failure.as_str(),
            "Initializing iterative resolver"
        );

        let forwarder = Arc::new(DnsForwarder::new(resolver));
        let resolve_hostname = ResolveHostnameUseCase::new(forwarder, resolver)
            .with_observer(Arc::new(StdoutObserver));

        Self { resolve_hostname }
    }
}
