//! Analyzer configuration

use serde::{Deserialize, Serialize};

/// Default number of hotspot rows to report
pub const DEFAULT_MAX_ENTRIES: usize = 10;

/// Default cap on the decompressed profile size, in MiB
pub const DEFAULT_MAX_PROFILE_MB: u64 = 512;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Number of hotspot rows to keep after ranking
    pub max_entries: usize,

    /// Max decompressed profile size in bytes
    pub max_profile_bytes: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let max_profile_mb: u64 = std::env::var("HOTSPOT_MAX_PROFILE_MB")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_PROFILE_MB);

        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            max_profile_bytes: mib_to_bytes(max_profile_mb),
        }
    }
}

fn mib_to_bytes(mib: u64) -> u64 {
    mib.saturating_mul(1024 * 1024)
}

impl AnalyzerConfig {
    /// Override the number of reported rows
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_profile_bytes == 0 {
            anyhow::bail!("Max profile size must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_max_entries() {
        let config = AnalyzerConfig {
            max_entries: 10,
            max_profile_bytes: 1024,
        }
        .with_max_entries(3);

        assert_eq!(config.max_entries, 3);
        assert_eq!(config.max_profile_bytes, 1024);
    }

    #[test]
    fn test_config_validation() {
        let valid = AnalyzerConfig {
            max_entries: 0,
            max_profile_bytes: 1,
        };
        assert!(valid.validate().is_ok());

        let invalid = AnalyzerConfig {
            max_entries: 10,
            max_profile_bytes: 0,
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_mib_to_bytes_saturates() {
        assert_eq!(mib_to_bytes(512), 512 * 1024 * 1024);
        assert_eq!(mib_to_bytes(u64::MAX), u64::MAX);
        assert_eq!(mib_to_bytes(u64::MAX / 1024), u64::MAX);
    }

    #[test]
    fn test_default_max_entries() {
        assert_eq!(AnalyzerConfig::default().max_entries, DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }
}
