//! Diagnostics for a resolver run.
//!
//! Lookup progress (public asset fetch, local node check, each private
//! resource) is traced to stderr; stdout is reserved for the report sections
//! the resolver streams. `logger.format = "json"` suits piping the run into a
//! log collector.

mod config;

pub(crate) use config::{LogFormat, LoggerConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. `RUST_LOG` wins over `logger.level`, so
/// `RUST_LOG=dkg_node_client=trace` shows every poll of a get operation.
pub(crate) fn initialize(logger_config: &LoggerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logger_config.level));

    match logger_config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer().json().with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
    }
}
