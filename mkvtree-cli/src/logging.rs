// ============================================================================
// mkvtree-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialization for the CLI
//
// The core library logs through the `log` facade; this module installs the
// env_logger backend once at startup. Log output goes to stderr so that
// command output on stdout stays machine-readable.
//
// USAGE:
// - default: warnings and errors only
// - -v / -vv / -vvv: info / debug / trace
// - RUST_LOG overrides the level chosen from the flags
//
// AI-ASSISTANT-INFO: Logging initialization for mkvtree-cli

use log::LevelFilter;

/// Maps the `-v` count to a level filter.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs env_logger with the level derived from `verbosity`.
pub fn init_logging(verbosity: u8) {
    let level = level_for_verbosity(verbosity);
    let env = env_logger::Env::default().default_filter_or(level.to_string().to_lowercase());

    // Ignore the error if a logger is already set (e.g. in tests)
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();

    log::debug!("Logger initialized with level: {}", level);
}
