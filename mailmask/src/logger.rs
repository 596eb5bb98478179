// mailmask/src/logger.rs
//! Logger initialization for the mailmask service.

use log::LevelFilter;

/// Initializes `env_logger`, honoring `RUST_LOG` unless an explicit level
/// override is supplied. Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp_secs().try_init();
}
