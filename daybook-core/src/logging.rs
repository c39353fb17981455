//! Logging bootstrap
//!
//! The library only speaks through the `log` facade; this module gives
//! embedders a one-call stderr backend. Initialization is process-wide
//! and idempotent.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Initializes stderr logging at the given level spec (e.g. "info").
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(spec: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_str(spec)
        .map_err(|e| format!("invalid log spec `{spec}`: {e}"))?
        .log_to_stderr()
        .start()
        .map_err(|e| format!("failed to start logger: {e}"))?;

    let _ = LOGGER.set(handle);
    Ok(())
}

/// The default level for the current build mode.
pub fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
