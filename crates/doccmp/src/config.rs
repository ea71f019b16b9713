//! User configuration loaded from `config.toml`

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Values read from the config file; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Preprocessing mode, validated when the run starts
    pub mode: Option<String>,
    pub ignore_case: Option<bool>,
    pub clean: Option<bool>,
    pub report: Option<PathBuf>,
    pub format: Option<String>,
    pub unicode_punctuation: Option<bool>,
}

impl Config {
    /// Default location: `<config dir>/doccmp/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("doccmp").join("config.toml"))
    }

    /// Load the config from an explicit path or the default location.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    tracing::debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            mode = "strict"
            ignore_case = true
            clean = false
            report = "out.txt"
            format = "json"
            unicode_punctuation = false
            "#,
        )
        .unwrap();

        assert_eq!(config.mode.as_deref(), Some("strict"));
        assert_eq!(config.ignore_case, Some(true));
        assert_eq!(config.clean, Some(false));
        assert_eq!(config.report, Some(PathBuf::from("out.txt")));
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.unicode_punctuation, Some(false));
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::parse("colour = true").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.toml");
        assert!(Config::load(Some(missing.as_path())).is_err());
    }
}
