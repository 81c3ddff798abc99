//! Process-wide logger bootstrap.
//!
//! Messages go through the `log` facade (actix-web's request logger writes
//! there too) and are printed to stderr by `flexi_logger`. Initialization runs
//! once; later calls are no-ops.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts logging at `level`, e.g. `info` or `verse_rhymer=debug,actix_web=info`.
pub fn init_logging(level: &str) -> Result<(), FlexiLoggerError> {
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_str(level)?
                .log_to_stderr()
                .format(flexi_logger::detailed_format)
                .start()
        })
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        assert!(init_logging("info").is_ok());
        assert!(init_logging("debug").is_ok());
        log::info!("logging initialized twice");
    }
}
