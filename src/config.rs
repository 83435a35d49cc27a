use crate::error::WrapperError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

pub const DEFAULT_LOG_FILE: &str = "/var/log/tshark.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Capture configuration as read from YAML. Every section is optional and an
/// absent field means the matching tshark flag is left out.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub capture: Option<CaptureConfig>,
    pub filters: Option<Vec<String>>,
    pub display_filters: Option<Vec<String>>,
    pub performance: Option<PerformanceConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub interface: Option<String>,
    pub output: Option<String>,
    pub rotate: Option<bool>,
    pub max_files: Option<u64>,
    /// Seconds per ring-buffer file.
    pub rotate_interval: Option<u64>,
    /// Megabytes per ring-buffer file.
    #[serde(deserialize_with = "megabytes")]
    pub max_size: Option<u64>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Capture buffer in megabytes.
    #[serde(deserialize_with = "megabytes")]
    pub buffer_size: Option<u64>,
    pub max_packets: Option<u64>,
    pub promiscuous_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

impl LoggingConfig {
    /// A section with neither `file` nor `level` does not enable file logging.
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.level.is_none()
    }

    pub fn file_or_default(&self) -> &str {
        self.file.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }

    pub fn level_or_default(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Accepts whole or fractional megabytes; fractions are truncated.
fn megabytes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Whole(u64),
        Fraction(f64),
    }

    match Option::<Size>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Size::Whole(mb)) => Ok(Some(mb)),
        Some(Size::Fraction(mb)) if mb.is_finite() && mb >= 0.0 => Ok(Some(mb.trunc() as u64)),
        Some(Size::Fraction(mb)) => Err(D::Error::custom(format!(
            "invalid size {mb}, expected a non-negative number of megabytes"
        ))),
    }
}

impl Config {
    /// Logging section that should add a log file, if any.
    pub fn file_logging(&self) -> Option<&LoggingConfig> {
        self.logging.as_ref().filter(|l| !l.is_empty())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WrapperError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WrapperError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| WrapperError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // 空文档或 `null` 视为所有段落均缺省。
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Option<Config> = serde_yaml::from_str(content)?;
        Ok(config.unwrap_or_default())
    }
}
