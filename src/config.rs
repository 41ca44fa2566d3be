//! termon configuration (htoprc-style key=value format)
//!
//! Read from `$XDG_CONFIG_HOME/termon/termonrc`, falling back to
//! `$HOME/.config/termon/termonrc`. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::color_scheme::ColorSchemeId;

/// Get the config file path
fn config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("termon").join("termonrc"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Sampler cadence
    pub sample_interval_ms: u64,
    /// Bounded key wait, which is also the redraw cadence
    pub poll_timeout_ms: u64,
    pub color_scheme_id: ColorSchemeId,
    /// Filesystem whose free space is shown
    pub disk_mount: PathBuf,
    /// Log destination; logging is off when unset
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_interval_ms: 1000,
            poll_timeout_ms: 1000,
            color_scheme_id: ColorSchemeId::Default,
            disk_mount: PathBuf::from("/"),
            log_file: None,
        }
    }
}

impl Config {
    /// Load config from the default location, returning defaults if the
    /// file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Parse `key=value` lines. Unknown keys and invalid values are ignored.
    pub fn parse(content: &str) -> Self {
        let mut cfg = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "sample_interval_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        cfg.sample_interval_ms = v.clamp(200, 10_000);
                    }
                }
                "poll_timeout_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        cfg.poll_timeout_ms = v.clamp(50, 5_000);
                    }
                }
                "color_scheme" => {
                    if let Some(id) = ColorSchemeId::from_name(value) {
                        cfg.color_scheme_id = id;
                    }
                }
                "disk_mount" if !value.is_empty() => cfg.disk_mount = PathBuf::from(value),
                "log_file" if !value.is_empty() => cfg.log_file = Some(PathBuf::from(value)),
                _ => {} // Ignore unknown keys
            }
        }

        cfg
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_input_gives_defaults() {
        assert_eq!(Config::parse(""), Config::default());
        assert_eq!(Config::default().sample_interval(), Duration::from_secs(1));
        assert_eq!(Config::default().poll_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn parses_known_keys_and_skips_noise() {
        let cfg = Config::parse(
            "# termon configuration\n\
             sample_interval_ms = 2000\n\
             poll_timeout_ms=250\n\
             color_scheme=Monochrome\n\
             disk_mount=/home\n\
             log_file=/tmp/termon.log\n\
             bogus=1\n\
             not a pair\n",
        );
        assert_eq!(cfg.sample_interval_ms, 2000);
        assert_eq!(cfg.poll_timeout_ms, 250);
        assert_eq!(cfg.color_scheme_id, ColorSchemeId::Monochrome);
        assert_eq!(cfg.disk_mount, PathBuf::from("/home"));
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/termon.log")));
    }

    #[test]
    fn out_of_range_values_are_clamped_and_garbage_ignored() {
        let cfg = Config::parse("sample_interval_ms=5\npoll_timeout_ms=99999\ncolor_scheme=neon\n");
        assert_eq!(cfg.sample_interval_ms, 200);
        assert_eq!(cfg.poll_timeout_ms, 5_000);
        assert_eq!(cfg.color_scheme_id, ColorSchemeId::Default);

        let cfg = Config::parse("sample_interval_ms=fast\nlog_file=\n");
        assert_eq!(cfg.sample_interval_ms, 1000);
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "poll_timeout_ms=500").unwrap();
        let cfg = Config::load_from(file.path()).unwrap();
        assert_eq!(cfg.poll_timeout_ms, 500);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("nope")).is_err());
    }
}
