//! Logging configuration using tracing
//!
//! The terminal belongs to the UI, so logs go to a daily rolling file in
//! `~/.carousel-tui/logs/`. The level is controlled by `CAROUSEL_TUI_LOG`:
//!
//! ```bash
//! CAROUSEL_TUI_LOG=debug carousel-tui
//! ```

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "CAROUSEL_TUI_LOG";

/// Initialize the logging subsystem
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "carousel-tui.log");

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("carousel_tui=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()?;

    tracing::info!(
        "carousel-tui session started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    tracing::info!("log directory: {}", log_dir.display());

    Ok(())
}

fn log_directory() -> PathBuf {
    log_directory_in(Config::config_dir())
}

/// `logs/` under the config directory, or under the working directory
/// when there is no home
fn log_directory_in(config_dir: Option<PathBuf>) -> PathBuf {
    config_dir.unwrap_or_else(|| PathBuf::from(".")).join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_directory_falls_back_to_working_dir() {
        assert_eq!(log_directory_in(None), PathBuf::from("./logs"));
    }

    #[test]
    fn test_log_directory_under_config_dir() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join(".carousel-tui");
        assert_eq!(
            log_directory_in(Some(config_dir.clone())),
            config_dir.join("logs")
        );
    }

    #[test]
    fn test_log_directory_follows_home() {
        let expected = match Config::config_dir() {
            Some(dir) => dir.join("logs"),
            None => PathBuf::from("./logs"),
        };
        assert_eq!(log_directory(), expected);
    }
}
