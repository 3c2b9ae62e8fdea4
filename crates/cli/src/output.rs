use ferrous_resolve_application::ports::ResolutionObserver;
use ferrous_resolve_domain::{DnsRecord, DomainError, Hostname, Resolution};
use std::process::ExitCode;

/// Prints every record that steered the resolution, one per line.
pub struct StdoutObserver;

impl ResolutionObserver for StdoutObserver {
    fn record_inspected(&self, record: &DnsRecord) {
        println!("   {}", record);
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Report {
    pub line: String,
    pub to_stderr: bool,
    pub success: bool,
}

impl Report {
    pub fn from_outcome(name: &Hostname, outcome: &Result<Resolution, DomainError>) -> Self {
        match outcome {
            Ok(resolution) => Self {
                line: format!("Result: {}", resolution.address),
                to_stderr: false,
                success: true,
            },
            Err(DomainError::NoAddressRecord { name: failed }) => Self {
                line: format!("Couldn't resolve {}, no A record found", failed),
                to_stderr: false,
                success: false,
            },
            Err(e) => Self {
                line: format!("Couldn't resolve {}: {}", name, e),
                to_stderr: true,
                success: false,
            },
        }
    }

    pub fn emit(&self) -> ExitCode {
        if self.to_stderr {
            eprintln!("{}", self.line);
        } else {
            println!("{}", self.line);
        }

        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
