use env_logger::{Builder, Env};
use log::SetLoggerError;

/// `RUST_LOG` takes precedence over the configured filter.
pub fn init(default_filter: &str) -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_filter)).try_init()
}
