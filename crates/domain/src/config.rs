pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::{ResolverConfig, TransportFailurePolicy};
pub use root::{CliOverrides, Config};
