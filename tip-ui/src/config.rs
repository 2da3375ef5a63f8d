//! Application configuration loaded from TOML.
//!
//! Every field is optional in the file; missing fields take the defaults
//! below.
//!
//! ```toml
//! locale = "de-DE"
//! default_tip_percent = 20
//! press_reset_ms = 150
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tip_core::{CurrencyError, CurrencyFormat};

use crate::controller::PRESS_RESET_DELAY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Locale(#[from] CurrencyError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Currency locale tag, e.g. `en-US`.
    pub locale: String,
    /// Initial slider position.
    pub default_tip_percent: f32,
    /// How long the calculate button stays pressed, in milliseconds.
    pub press_reset_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            default_tip_percent: 15.0,
            press_reset_ms: PRESS_RESET_DELAY.as_millis() as u64,
        }
    }
}

impl AppConfig {
    /// Reads and parses a config file. The locale is checked later by
    /// [`AppConfig::resolve_currency`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Currency format for `locale_override` when given, else for the
    /// configured locale. Only the locale actually used is validated.
    pub fn resolve_currency(
        &self,
        locale_override: Option<&str>,
    ) -> Result<CurrencyFormat, ConfigError> {
        let locale = locale_override.unwrap_or(&self.locale);
        Ok(CurrencyFormat::for_locale(locale)?)
    }

    pub fn press_reset_delay(&self) -> Duration {
        Duration::from_millis(self.press_reset_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.press_reset_delay(), Duration::from_millis(150));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml("locale = \"ja-JP\"").unwrap();

        assert_eq!(config.locale, "ja-JP");
        assert_eq!(config.default_tip_percent, 15.0);
        assert_eq!(config.resolve_currency(None).unwrap(), CurrencyFormat::ja_jp());
    }

    #[test]
    fn wrong_field_type_is_a_parse_error() {
        assert!(AppConfig::from_toml("press_reset_ms = \"soon\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/tip-time.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    fn write_config(
        name: &str,
        contents: &str,
    ) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tip-time-{name}-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{contents}").unwrap();
        path
    }

    #[test]
    fn load_defers_locale_validation() {
        let path = write_config("bad-locale", "locale = \"tlh-KX\"");

        let config = AppConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        let config = config.unwrap();

        assert!(matches!(
            config.resolve_currency(None),
            Err(ConfigError::Locale(CurrencyError::UnknownLocale(_)))
        ));
    }

    #[test]
    fn locale_override_wins_over_invalid_file_locale() {
        let path = write_config("override", "locale = \"tlh-KX\"");

        let config = AppConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        let config = config.unwrap();

        assert_eq!(config.resolve_currency(Some("fr-FR")).unwrap(), CurrencyFormat::fr_fr());
    }

    #[test]
    fn invalid_override_is_reported() {
        let config = AppConfig::default();

        assert!(matches!(
            config.resolve_currency(Some("xx")),
            Err(ConfigError::Locale(CurrencyError::UnknownLocale(_)))
        ));
    }
}
