mod logging;

pub use logging::init_logging;

use anyhow::Context;
use ferrous_resolve_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, overrides).context("Failed to load configuration")
}
