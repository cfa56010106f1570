use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes log records to stderr as `HH:MM:SS LEVEL [target] message`
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Map `-v`/`-q` counts onto a level; info by default
    pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
        if quiet {
            return LevelFilter::Warn;
        }
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(record: &Record) -> String {
        let timestamp = Local::now().format("%H:%M:%S");
        if record.level() == Level::Info {
            format!("{} [zine] {}", timestamp, record.args())
        } else {
            format!(
                "{} {:<5} [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            )
        }
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(ConsoleLogger::level_for(0, false), LevelFilter::Info);
        assert_eq!(ConsoleLogger::level_for(1, false), LevelFilter::Debug);
        assert_eq!(ConsoleLogger::level_for(3, false), LevelFilter::Trace);
        assert_eq!(ConsoleLogger::level_for(2, true), LevelFilter::Warn);
    }

    #[test]
    fn test_enabled_respects_level() {
        use log::Log;

        let logger = ConsoleLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).build();
        let warn = Metadata::builder().level(Level::Warn).build();

        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
    }

    #[test]
    fn test_init_installs_global_logger() {
        use anyhow::Context;

        ConsoleLogger::new(LevelFilter::Debug).init().unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);

        // Only one logger per process
        let second = ConsoleLogger::new(LevelFilter::Info)
            .init()
            .context("Failed to install logger");
        assert!(second.is_err());
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
