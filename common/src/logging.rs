//! Logger initialisation

use log::LevelFilter;

/// Initialise `env_logger` with an `info` default, overridable through `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    init_with_level(LevelFilter::Info);
}

/// Initialise `env_logger` with the given default level.
pub fn init_with_level(default: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();

    if result.is_ok() {
        log::debug!("logger initialised at {default}");
    }
}
