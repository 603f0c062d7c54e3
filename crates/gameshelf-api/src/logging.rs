//! Tracing subscriber setup shared by the server and CLI binaries.

use tracing_subscriber::{EnvFilter, fmt};

use gameshelf_core::config::LoggingConfig;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `config.level`. `config.format` selects JSON or
/// pretty output; anything other than `"json"` is pretty.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}
