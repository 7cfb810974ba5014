//! Diagnostic logging setup
//!
//! Library code only emits `tracing` events; the binary installs the
//! subscriber. Output goes to stderr so it never mixes with command output.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the filter directives
pub const LOG_ENV_VAR: &str = "POCKET_LEDGER_LOG";

/// Directives used when the environment variable is unset or invalid
pub const DEFAULT_DIRECTIVES: &str = "pocket_ledger=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global fmt subscriber; later calls are no-ops
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        // Another subscriber may already be installed by an embedding program
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
