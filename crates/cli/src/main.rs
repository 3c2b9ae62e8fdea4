use clap::Parser;
use ferrous_resolve_domain::CliOverrides;
use ferrous_resolve_infrastructure::dns::MessageBuilder;
use std::net::Ipv4Addr;
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod di;
mod output;

#[derive(Parser, Debug)]
#[command(name = "ferrous-resolve")]
#[command(version)]
#[command(about = "Ferrous Resolve - iterative DNS resolution from a bootstrap nameserver")]
struct Cli {
    /// Hostname to resolve (a trailing dot is added if missing)
    hostname: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Bootstrap nameserver
    #[arg(short = 's', long, value_name = "IPV4")]
    server: Option<Ipv4Addr>,

    /// Destination port for every query
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Maximum number of queries for one resolution (0 = unlimited)
    #[arg(long)]
    max_hops: Option<u32>,

    /// Stop on the first network failure instead of treating it as an empty reply
    #[arg(long)]
    abort_on_transport_error: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bootstrap_server: self.server,
            port: self.port,
            query_timeout_ms: self.timeout_ms,
            max_hops: self.max_hops,
            abort_on_transport_error: self.abort_on_transport_error,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Ferrous Resolve v{}", env!("CARGO_PKG_VERSION"));

    let name = MessageBuilder::wire_hostname(&cli.hostname)?;

    let services = di::DnsServices::new(&config);
    let outcome = services.resolve_hostname.execute(&name).await;

    Ok(output::Report::from_outcome(&name, &outcome).emit())
}
