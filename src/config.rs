//! Layered settings: built-in defaults, an optional file, then environment.
//!
//! Environment variables use the `SPACEWATCH_` prefix and `__` between
//! nesting levels, e.g. `SPACEWATCH_FEEDS__BASE_URL` or
//! `SPACEWATCH_THRESHOLDS__KP`.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use spacewatch_feeds::DEFAULT_BASE_URL;
use spacewatch_types::ThresholdSet;

const ENV_PREFIX: &str = "SPACEWATCH";

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub feeds: FeedSettings,
    pub thresholds: ThresholdSettings,
}

/// Where and how feeds are fetched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Service root the feed paths are appended to.
    pub base_url: String,
    /// Whole-request timeout. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Alert boundaries. Polarities are fixed per metric.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThresholdSettings {
    pub kp: f64,
    pub speed: f64,
    pub bz: f64,
    pub xray: f64,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            kp: ThresholdSet::KP,
            speed: ThresholdSet::SPEED,
            bz: ThresholdSet::BZ,
            xray: ThresholdSet::XRAY,
        }
    }
}

impl Settings {
    /// Load settings from `path` (if given) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::build(path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn build(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<Settings>())
            .with_context(|| match path {
                Some(p) => format!("Failed to load settings from {}", p.display()),
                None => "Failed to load settings from environment".to_string(),
            })?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        let url = &self.feeds.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("feeds.base_url must be an http(s) URL, got {:?}", url);
        }
        if self.feeds.timeout_secs == Some(0) {
            bail!("feeds.timeout_secs must be at least 1");
        }

        let t = &self.thresholds;
        for (name, value) in [("kp", t.kp), ("speed", t.speed), ("bz", t.bz), ("xray", t.xray)] {
            if !value.is_finite() {
                bail!("thresholds.{} must be a finite number", name);
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.feeds.timeout_secs.map(Duration::from_secs)
    }

    pub fn thresholds(&self) -> ThresholdSet {
        let t = &self.thresholds;
        ThresholdSet::new(t.kp, t.speed, t.bz, t.xray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::environment().source(Some(map))
    }

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_builtin_thresholds() {
        let settings = Settings::build(None, env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.thresholds(), ThresholdSet::default());
        assert_eq!(settings.feeds.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout(), None);
    }

    #[test]
    fn test_file_overrides() {
        let file = toml_file(
            r#"
[feeds]
base_url = "http://localhost:8080"
timeout_secs = 15

[thresholds]
kp = 6.0
bz = -10.0
"#,
        );

        let settings = Settings::build(Some(file.path()), env(&[])).unwrap();
        assert_eq!(settings.feeds.base_url, "http://localhost:8080");
        assert_eq!(settings.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(settings.thresholds.kp, 6.0);
        assert_eq!(settings.thresholds.bz, -10.0);
        // Untouched keys keep their defaults
        assert_eq!(settings.thresholds.speed, ThresholdSet::SPEED);
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = toml_file("[thresholds]\nspeed = 500.0\n");
        let settings = Settings::build(
            Some(file.path()),
            env(&[("SPACEWATCH_THRESHOLDS__SPEED", "750")]),
        )
        .unwrap();
        assert_eq!(settings.thresholds.speed, 750.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Settings::build(Some(Path::new("/nonexistent/spacewatch.toml")), env(&[]))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/spacewatch.toml"));
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = Settings::build(None, env(&[("SPACEWATCH_FEEDS__BASE_URL", "ftp://x")]))
            .unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let file = toml_file("[feeds]\ntimeout_secs = 0\n");
        assert!(Settings::build(Some(file.path()), env(&[])).is_err());
    }
}
