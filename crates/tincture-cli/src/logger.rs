//! Stderr logger for the `log` facade.
//!
//! Lines look like `2026-01-02T03:04:05+00:00 WARN  message`.

use std::fmt;
use std::io::Write;

use chrono::{DateTime, Local, TimeZone};
use log::{Level, LevelFilter};

/// Environment variable overriding the default log level.
pub const LOG_ENV: &str = "TINCTURE_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(&Local::now(), record.level(), record.args());
        // Nowhere to report a failed write to stderr.
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Formats one log line.
pub fn format_line<Tz>(timestamp: &DateTime<Tz>, level: Level, message: impl fmt::Display) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "{} {:<5} {}",
        timestamp.format("%Y-%m-%dT%H:%M:%S%:z"),
        level,
        message
    )
}

/// Picks the level from `-v`/`-q` flags, falling back to `env` (the value
/// of `TINCTURE_LOG`) and then to `Warn`.
pub fn level_from_flags(verbose: u8, quiet: bool, env: Option<&str>) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => env
            .and_then(|value| value.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the logger and sets the maximum level.
///
/// Calling this again only updates the level.
pub fn init(level: LevelFilter) {
    // Fails only if a logger is already installed, which is fine.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_line() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            format_line(&ts, Level::Warn, "theme skipped"),
            "2026-01-02T03:04:05+00:00 WARN  theme skipped"
        );
    }

    #[test]
    fn test_format_line_with_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let ts = offset.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(
            format_line(&ts, Level::Error, format_args!("{} failed", "alert")),
            "2026-06-01T12:00:00+02:00 ERROR alert failed"
        );
    }

    #[test]
    fn test_level_from_flags() {
        assert_eq!(level_from_flags(0, false, None), LevelFilter::Warn);
        assert_eq!(level_from_flags(1, false, None), LevelFilter::Info);
        assert_eq!(level_from_flags(2, false, None), LevelFilter::Debug);
        assert_eq!(level_from_flags(3, false, None), LevelFilter::Trace);
        assert_eq!(level_from_flags(7, false, None), LevelFilter::Trace);
        assert_eq!(level_from_flags(0, true, None), LevelFilter::Error);
    }

    #[test]
    fn test_env_applies_only_without_flags() {
        assert_eq!(level_from_flags(0, false, Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_flags(0, false, Some("OFF")), LevelFilter::Off);
        assert_eq!(level_from_flags(0, false, Some("loud")), LevelFilter::Warn);
        assert_eq!(level_from_flags(1, false, Some("trace")), LevelFilter::Info);
        assert_eq!(level_from_flags(0, true, Some("trace")), LevelFilter::Error);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(LevelFilter::Warn);
        init(LevelFilter::Info);
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
