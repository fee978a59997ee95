//! Stderr logger for the CLI and batch jobs.
//!
//! Lines look like `[elapsed LEVEL crate] message`. The `FINMARK_LOG`
//! environment variable (`off`, `warn`, `debug`, ...) overrides the level
//! passed by the caller. Skipped records are logged at `warn`, so the
//! logger also counts warnings for an end-of-batch summary.

use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable that overrides the requested log level.
pub const LOG_ENV: &str = "FINMARK_LOG";

struct BatchLogger {
    level: LevelFilter,
    started: Instant,
    warnings: AtomicUsize,
}

impl BatchLogger {
    fn write_line(&self, record: &Record) {
        let elapsed = self.started.elapsed().as_secs_f64();
        let krate = record.target().split("::").next().unwrap_or("");
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{:7.3}s {:>5} {}] {}",
            elapsed,
            record.level(),
            krate,
            record.args()
        );
    }
}

impl Log for BatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if record.level() == Level::Warn {
            self.warnings.fetch_add(1, Ordering::Relaxed);
        }
        self.write_line(record);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<BatchLogger> = OnceLock::new();

/// Level from `FINMARK_LOG` when set and parseable, else `fallback`.
fn resolve_level(env_value: Option<&str>, fallback: LevelFilter) -> LevelFilter {
    env_value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(fallback)
}

/// Install the stderr logger, honouring a `FINMARK_LOG` override.
///
/// Calling this more than once is a no-op after the first successful
/// initialization; the first level wins.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let level = resolve_level(std::env::var(LOG_ENV).ok().as_deref(), level);
        let logger = LOGGER.get_or_init(|| BatchLogger {
            level,
            started: Instant::now(),
            warnings: AtomicUsize::new(0),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Warnings emitted through this logger so far (0 if it is not installed).
pub fn warning_count() -> usize {
    LOGGER
        .get()
        .map_or(0, |l| l.warnings.load(Ordering::Relaxed))
}

/// Install a `tracing` subscriber filtered by `FINMARK_LOG` (default `info`).
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    if json {
        let _ = builder.json().flatten_event(true).finish().try_init();
    } else {
        let _ = builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins_when_parseable() {
        assert_eq!(
            resolve_level(Some("debug"), LevelFilter::Info),
            LevelFilter::Debug
        );
        assert_eq!(
            resolve_level(Some(" OFF "), LevelFilter::Info),
            LevelFilter::Off
        );
        assert_eq!(
            resolve_level(Some("loud"), LevelFilter::Warn),
            LevelFilter::Warn
        );
        assert_eq!(resolve_level(None, LevelFilter::Error), LevelFilter::Error);
    }

    #[test]
    fn warnings_are_counted_once_installed() {
        init_with_level(LevelFilter::Warn).expect("first init");
        init_with_level(LevelFilter::Trace).expect("second init");
        let before = warning_count();
        log::warn!("record skipped");
        log::info!("filtered out");
        if LOGGER.get().is_some_and(|l| l.level >= LevelFilter::Warn) {
            assert_eq!(warning_count(), before + 1);
        }
    }
}
