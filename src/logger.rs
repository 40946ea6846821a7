use std::io::Write;

use env_logger::{Builder, Target, WriteStyle};
use log::Level;

use crate::cli::Verbosity;

fn tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "EXTRA",
        Level::Trace => "DEV",
    }
}

fn builder(verbosity: Verbosity) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(verbosity.level_filter())
        .target(Target::Stdout)
        .write_style(WriteStyle::Never)
        .format(|buf, record| writeln!(buf, "[{}] {}", tag(record.level()), record.args()));
    builder
}

/// Installs the stdout logger for `verbosity`. Only the first call in a
/// process has any effect.
pub fn init(verbosity: Verbosity) {
    builder(verbosity).try_init().ok();
}
