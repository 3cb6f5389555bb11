//! Tracing subscriber setup.
//!
//! The viewer owns the terminal, so logs only go somewhere when asked:
//! to `--log-file` if given, else to stderr in `--json` mode. `RUST_LOG`
//! overrides `--log-level`.

use crate::config::Config;
use crate::errors::VizError;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(std::path::PathBuf),
    Stderr,
    Off,
}

impl LogTarget {
    pub fn for_config(config: &Config) -> Self {
        match (&config.log_file, config.json) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Off,
        }
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Call once, before the run is recorded.
pub fn init(config: &Config) -> Result<(), VizError> {
    let filter = env_filter(&config.log_level);
    match LogTarget::for_config(config) {
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .without_time()
                        .compact(),
                )
                .init();
        }
        LogTarget::Off => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::Speed;
    use crate::scenario::Scenario;
    use crate::structures::SequenceOperation;

    fn config(json: bool, log_file: Option<&str>) -> Config {
        Config {
            scenario: Scenario::Stack {
                seed: Vec::new(),
                operation: SequenceOperation::Remove,
            },
            speed: Speed::default(),
            json,
            log_file: log_file.map(Into::into),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_log_target_selection() {
        assert_eq!(LogTarget::for_config(&config(false, None)), LogTarget::Off);
        assert_eq!(LogTarget::for_config(&config(true, None)), LogTarget::Stderr);
        assert_eq!(
            LogTarget::for_config(&config(true, Some("run.log"))),
            LogTarget::File("run.log".into())
        );
    }
}
