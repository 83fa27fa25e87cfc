use log::LevelFilter;
use simple_logger::SimpleLogger;

/// `--debug` wins over the default, `--quiet` keeps warnings and errors only
pub fn log_level(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(level: LevelFilter) -> LevelFilter {
    // Only fails if a logger is already installed
    let _ = SimpleLogger::new()
        .with_level(level)
        .init();

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false, false), LevelFilter::Info);
        assert_eq!(log_level(true, false), LevelFilter::Debug);
        assert_eq!(log_level(false, true), LevelFilter::Warn);
    }
}
