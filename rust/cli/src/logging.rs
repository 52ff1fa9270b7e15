//! Diagnostic logging setup.
//!
//! Game output goes to stdout; `tracing` events go to stderr and are
//! filtered by `RUST_LOG` (default `warn`), so a normal game shows none.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logging();
        init_logging();
        tracing::debug!("logging initialized");
    }
}
