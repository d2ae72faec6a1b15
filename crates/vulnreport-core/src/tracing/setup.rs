//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the vulnreport logging system.
///
/// Reads the `VULNREPORT_LOG` environment variable for per-module levels,
/// e.g. `VULNREPORT_LOG=vulnreport_analysis::extraction=debug,vulnreport=info`.
///
/// Falls back to `vulnreport=info` if `VULNREPORT_LOG` is unset or invalid.
/// Logs go to stderr so stdout stays free for rendered reports.
///
/// Idempotent; also a no-op when another global subscriber is already set.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
