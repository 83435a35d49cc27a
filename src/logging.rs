use crate::config::LoggingConfig;
use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Installs the global subscriber. Stdout is always logged at `info` (or
/// `RUST_LOG`); a `logging` section adds a log file at its own level.
pub fn init(logging: Option<&LoggingConfig>) {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_filter());

    let mut file_error = None;
    let mut file_target = None;
    let file_layer = logging.and_then(|cfg| {
        let path = cfg.file_or_default();
        let level = parse_level(cfg.level_or_default());
        match open_log_file(path) {
            Ok(file) => {
                file_target = Some((path.to_string(), level));
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_filter(level),
                )
            }
            Err(err) => {
                file_error = Some((path.to_string(), err));
                None
            }
        }
    });

    // 重复初始化（例如测试中）直接忽略。
    let _ = tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    if let Some((path, level)) = file_target {
        info!("Logging to {path} with level {}", level_name(level));
    }
    if let Some((path, err)) = file_error {
        warn!("cannot open log file {path}: {err}; logging to stdout only");
    }
}

fn stdout_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &str) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Maps a configured level name to a filter. Unknown names fall back to info.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" | "warning" => LevelFilter::WARN,
        "error" | "critical" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

fn level_name(level: LevelFilter) -> String {
    level.to_string().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level("WARNING"), LevelFilter::WARN);
        assert_eq!(parse_level("Error"), LevelFilter::ERROR);
        assert_eq!(parse_level("critical"), LevelFilter::ERROR);
        assert_eq!(parse_level("verbose"), LevelFilter::INFO);
    }

    #[test]
    fn level_display() {
        assert_eq!(level_name(LevelFilter::WARN), "WARN");
    }

    #[test]
    fn log_file_opened_in_append_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrap.log");
        std::fs::write(&path, "existing\n").unwrap();

        use std::io::Write;
        let mut file = open_log_file(path.to_str().unwrap()).unwrap();
        file.write_all(b"appended\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing\nappended\n");
    }

    #[test]
    fn log_file_in_missing_dir_fails() {
        assert!(open_log_file("/nonexistent/dir/wrap.log").is_err());
    }
}
