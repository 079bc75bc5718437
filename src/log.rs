use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises a logger printing `[LEVEL] message` lines to stderr.
/// `RUST_LOG` takes precedence over `level` if it is set.
/// Calling it more than once is harmless; later calls are ignored.
pub fn build_pace_logger_for_level(level: LevelFilter) {
    let _ = Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();
}

/// Raises `base` by one level per occurrence of `-v`
pub fn build_pace_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    let level = LevelFilter::iter()
        .skip_while(|&l| l != base)
        .nth(verbosity)
        .unwrap_or(LevelFilter::Trace);

    build_pace_logger_for_level(level);
}
