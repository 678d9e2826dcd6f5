//! `tracing` setup shared by the binaries.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Safe to call multiple times; only the first call has
/// effect.
pub fn init(default_filter: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
        {
            tracing::debug!("subscriber already installed: {e}");
        }
    });
}
