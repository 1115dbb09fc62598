use std::io::Write;

use colored::{ColoredString, Colorize};
use env_logger::Builder;
use log::{Level, LevelFilter};

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,  // default: fallback notices and errors
        1 => LevelFilter::Info,  // -v: mode and request flow
        2 => LevelFilter::Debug, // -vv: raw responses
        _ => LevelFilter::Trace, // -vvv: prompts
    }
}

fn level_label(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN ".yellow().bold(),
        Level::Info => "INFO ".white().bold(),
        Level::Debug => "DEBUG".bright_black(),
        Level::Trace => "TRACE".bright_black(),
    }
}

/// Install the stderr logger. `RUST_LOG`, when set, overrides `-v`.
pub fn init_logger(verbosity: u8) {
    let mut builder = Builder::new();
    builder.filter_level(level_filter(verbosity));
    builder.parse_default_env();

    builder.format(|buf, record| {
        let label = level_label(record.level());
        if record.level() >= Level::Debug {
            writeln!(buf, "{} [{}] {}", label, record.target(), record.args())
        } else {
            writeln!(buf, "{} {}", label, record.args())
        }
    });

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
