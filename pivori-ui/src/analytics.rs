//! Browser Analytics
//!
//! Analytics backend used by the dashboard. The API key is read at build
//! time from `PIVORI_ANALYTICS_KEY`.

use pivori_studio::analytics::{Analytics, AnalyticsConfig, AnalyticsError};

/// Analytics configuration baked into the bundle
pub fn config() -> AnalyticsConfig {
    AnalyticsConfig::from_key(option_env!("PIVORI_ANALYTICS_KEY"))
}

/// Analytics session bound to the current page origin
#[derive(Debug, Default)]
pub struct BrowserAnalytics {
    origin: Option<String>,
}

impl BrowserAnalytics {
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }
}

impl Analytics for BrowserAnalytics {
    fn init(&mut self, config: &AnalyticsConfig) -> Result<(), AnalyticsError> {
        if self.origin.is_some() {
            return Err(AnalyticsError::AlreadyInitialized);
        }
        if config.api_key.is_empty() {
            return Err(AnalyticsError::MissingKey);
        }

        let window = web_sys::window()
            .ok_or_else(|| AnalyticsError::Unavailable("no window".to_string()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|e| AnalyticsError::Unavailable(format!("{:?}", e)))?;

        web_sys::console::log_1(&format!("Analytics session started for {}", origin).into());
        self.origin = Some(origin);
        Ok(())
    }
}
