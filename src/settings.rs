//! Dashboard Settings
//!
//! Settings form values and the save command behind the Settings page.
//! The backing store is in-memory only; nothing survives a reload.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default API URL shown in the settings form
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Options offered by the theme selector, in display order
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Light" | "light" => Ok(Theme::Light),
            "Dark" | "dark" => Ok(Theme::Dark),
            other => Err(SettingsError::UnknownTheme(other.to_string())),
        }
    }
}

/// Settings errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("API URL is empty")]
    EmptyApiUrl,

    #[error("API URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),

    #[error("API URL has no host: {0}")]
    MissingHost(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Failed to store settings: {0}")]
    Store(String),
}

/// Values edited on the Settings page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    pub fn new(api_url: impl Into<String>, theme: Theme) -> Self {
        Self {
            api_url: api_url.into(),
            theme,
        }
    }

    /// Check the API URL is an http(s) URL with a host
    pub fn validate(&self) -> Result<(), SettingsError> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(SettingsError::EmptyApiUrl);
        }

        // Schemes are case-insensitive
        let rest = match url.split_once("://") {
            Some((scheme, rest))
                if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
            {
                rest
            }
            _ => return Err(SettingsError::UnsupportedScheme(url.to_string())),
        };

        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() || host.starts_with(':') {
            return Err(SettingsError::MissingHost(url.to_string()));
        }

        Ok(())
    }
}

/// Where saved settings go
pub trait SettingsStore {
    /// Currently saved settings
    fn load(&self) -> Settings;

    /// Replace the saved settings
    fn save(&mut self, settings: Settings) -> Result<(), SettingsError>;
}

/// In-memory settings store
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    current: Settings,
    saves: usize,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Settings {
        self.current.clone()
    }

    fn save(&mut self, settings: Settings) -> Result<(), SettingsError> {
        self.current = settings;
        self.saves += 1;
        Ok(())
    }
}

/// Validate the submitted form values and write them to `store`.
///
/// Returns the settings as stored (API URL trimmed). On error the store is
/// left untouched.
pub fn save_settings<S: SettingsStore + ?Sized>(
    store: &mut S,
    api_url: &str,
    theme: &str,
) -> Result<Settings, SettingsError> {
    let settings = Settings::new(api_url.trim(), theme.parse()?);
    settings.validate()?;

    store.save(settings.clone())?;
    tracing::info!(api_url = %settings.api_url, theme = %settings.theme, "Settings saved");

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl SettingsStore for FailingStore {
        fn load(&self) -> Settings {
            Settings::default()
        }

        fn save(&mut self, _settings: Settings) -> Result<(), SettingsError> {
            Err(SettingsError::Store("read-only".to_string()))
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, "http://localhost:8000");
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_theme_options() {
        let options: Vec<_> = Theme::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(options, ["Light", "Dark"]);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "Solarized".parse::<Theme>(),
            Err(SettingsError::UnknownTheme("Solarized".to_string()))
        );
    }

    #[test]
    fn test_validate_urls() {
        assert!(Settings::new("https://api.example.com/v1", Theme::Dark).validate().is_ok());
        assert!(Settings::new("http://127.0.0.1:9000", Theme::Light).validate().is_ok());

        assert_eq!(
            Settings::new("   ", Theme::Light).validate(),
            Err(SettingsError::EmptyApiUrl)
        );
        assert!(matches!(
            Settings::new("ftp://files", Theme::Light).validate(),
            Err(SettingsError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            Settings::new("http://", Theme::Light).validate(),
            Err(SettingsError::MissingHost(_))
        ));
        assert!(matches!(
            Settings::new("http://:8000/", Theme::Light).validate(),
            Err(SettingsError::MissingHost(_))
        ));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert!(Settings::new("HTTP://localhost:8000", Theme::Light).validate().is_ok());
        assert!(Settings::new("HttpS://api.example.com", Theme::Dark).validate().is_ok());

        assert!(matches!(
            Settings::new("FTP://files", Theme::Light).validate(),
            Err(SettingsError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            Settings::new("httpx://api.example.com", Theme::Light).validate(),
            Err(SettingsError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            Settings::new("HTTPS://", Theme::Light).validate(),
            Err(SettingsError::MissingHost(_))
        ));

        let mut store = MemorySettingsStore::new();
        let saved = save_settings(&mut store, "HTTPS://pivori.dev", "Light").unwrap();
        assert_eq!(saved.api_url, "HTTPS://pivori.dev");
    }

    #[test]
    fn test_save_settings() {
        let mut store = MemorySettingsStore::new();
        assert_eq!(store.load(), Settings::default());

        let saved = save_settings(&mut store, " https://pivori.dev ", "Dark").unwrap();
        assert_eq!(saved, Settings::new("https://pivori.dev", Theme::Dark));
        assert_eq!(store.load(), saved);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_invalid_save_leaves_store_untouched() {
        let mut store = MemorySettingsStore::new();

        assert!(save_settings(&mut store, "localhost:8000", "Light").is_err());
        assert!(save_settings(&mut store, "http://localhost:8000", "Blue").is_err());

        assert_eq!(store.load(), Settings::default());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_store_failure_is_reported() {
        let mut store = FailingStore;
        let result = save_settings(&mut store, DEFAULT_API_URL, "Light");
        assert_eq!(result, Err(SettingsError::Store("read-only".to_string())));
    }
}
