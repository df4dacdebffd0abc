use std::str::FromStr;

use chrono_tz::Tz;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub backup: BackupConfig,
    #[serde(default)]
    pub time: TimeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Upstream vnStat JSON endpoint. Must start with http:// or https://.
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackupConfig {
    pub output_dir: String,
    pub backup_dir: String,
    /// How many most-recent days to back up; day 0 is yesterday, never today.
    #[serde(default = "default_days_back")]
    pub days_back: u32,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_days_back() -> u32 {
    1
}

fn default_file_prefix() -> String {
    "vnstat".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeConfig {
    /// IANA zone name used to decide which calendar day is "yesterday".
    /// Deliberately not the host's local zone.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "Asia/Shanghai".into()
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.source.api_url.starts_with("http://") || self.source.api_url.starts_with("https://"),
            "source.api_url must start with http:// or https://, got {:?}",
            self.source.api_url
        );
        anyhow::ensure!(
            self.source.timeout_secs > 0,
            "source.timeout_secs must be > 0, got {}",
            self.source.timeout_secs
        );
        anyhow::ensure!(
            !self.backup.output_dir.is_empty(),
            "backup.output_dir must be non-empty"
        );
        anyhow::ensure!(
            !self.backup.backup_dir.is_empty(),
            "backup.backup_dir must be non-empty"
        );
        anyhow::ensure!(
            self.backup.days_back > 0,
            "backup.days_back must be > 0, got {}",
            self.backup.days_back
        );
        anyhow::ensure!(
            !self.backup.file_prefix.is_empty(),
            "backup.file_prefix must be non-empty"
        );
        anyhow::ensure!(
            Tz::from_str(&self.time.timezone).is_ok(),
            "time.timezone is not a known IANA zone: {:?}",
            self.time.timezone
        );
        Ok(())
    }

    /// Parsed timezone. `validate()` has already checked the name.
    pub fn timezone(&self) -> Tz {
        Tz::from_str(&self.time.timezone).unwrap_or(chrono_tz::Tz::UTC)
    }
}
