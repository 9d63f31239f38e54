use tracing_subscriber::EnvFilter;

use crate::error::{EtlError, Result};

/// Installs the global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise the level follows `verbosity`
/// (0 = info, 1 = debug, 2+ = trace).
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| EtlError::Logging(e.to_string()))
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
