pub mod cli;

use crate::adapters::http::DEFAULT_REQUEST_TIMEOUT;
use crate::core::fetcher::{DEFAULT_ATTEMPTS, DEFAULT_BACKOFF};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_range, Validate};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SOURCE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "jetwatch"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Polls aircraft marketplaces and reports newly listed business jets")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "data"))]
    pub data_dir: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "seen.sqlite"))]
    pub db_file: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "latest_report.md"))]
    pub report_file: String,

    #[cfg_attr(
        feature = "cli",
        arg(
            long,
            default_value_t = DEFAULT_SOURCE_DELAY.as_millis() as u64,
            help = "Pause between marketplaces"
        )
    )]
    pub source_delay_ms: u64,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_ATTEMPTS))]
    pub retry_attempts: usize,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value_t = DEFAULT_BACKOFF.as_millis() as u64)
    )]
    pub retry_backoff_ms: u64,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())
    )]
    pub request_timeout_secs: u64,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub log_json: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log CPU and memory per phase"))]
    pub monitor: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            db_file: "seen.sqlite".to_string(),
            report_file: "latest_report.md".to_string(),
            source_delay_ms: DEFAULT_SOURCE_DELAY.as_millis() as u64,
            retry_attempts: DEFAULT_ATTEMPTS,
            retry_backoff_ms: DEFAULT_BACKOFF.as_millis() as u64,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            verbose: false,
            log_json: false,
            monitor: false,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_path("db_file", &self.db_file)?;
        validate_path("report_file", &self.report_file)?;
        validate_positive_number("retry_attempts", self.retry_attempts, 1)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.db_file)
    }

    fn report_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.report_file)
    }

    fn source_delay(&self) -> Duration {
        Duration::from_millis(self.source_delay_ms)
    }

    fn retry_attempts(&self) -> usize {
        self.retry_attempts
    }

    fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
