//! stderr logging for the polydiv binary. stdout carries only the report.

use std::io::{self, IsTerminal};

use tracing::Level;

pub(crate) fn log_level(verbose: u8, quiet: bool, explain: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // --explain reports at info level, so it has to be visible
    if explain && level < Level::INFO {
        Level::INFO
    } else {
        level
    }
}

pub(crate) fn init_tracing(level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0, false, false), Level::WARN);
        assert_eq!(log_level(1, false, false), Level::INFO);
        assert_eq!(log_level(2, false, false), Level::DEBUG);
        assert_eq!(log_level(9, false, false), Level::TRACE);
        assert_eq!(log_level(0, true, true), Level::ERROR);
    }

    #[test]
    fn explain_raises_level_to_info() {
        assert_eq!(log_level(0, false, true), Level::INFO);
        assert_eq!(log_level(2, false, true), Level::DEBUG);
    }
}
