//! Analytics Bootstrap
//!
//! Startup hook for the external analytics collaborator. Initialization is
//! best effort: a failure is logged and the application still mounts.

use thiserror::Error;

/// Environment variable supplying the analytics API key
pub const ANALYTICS_KEY_VAR: &str = "PIVORI_ANALYTICS_KEY";

/// Key used when no key is configured
pub const DEFAULT_ANALYTICS_KEY: &str = "default-key";

/// Analytics errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("Analytics API key is missing")]
    MissingKey,

    #[error("Analytics already initialized")]
    AlreadyInitialized,

    #[error("Analytics unavailable: {0}")]
    Unavailable(String),
}

/// Configuration passed to the analytics init call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub api_key: String,
}

impl AnalyticsConfig {
    /// Build from an optional configured key. Unset or blank falls back to
    /// [`DEFAULT_ANALYTICS_KEY`].
    pub fn from_key(key: Option<&str>) -> Self {
        let api_key = key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(DEFAULT_ANALYTICS_KEY);

        Self {
            api_key: api_key.to_string(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self::from_key(None)
    }
}

/// An analytics backend
pub trait Analytics {
    fn init(&mut self, config: &AnalyticsConfig) -> Result<(), AnalyticsError>;
}

/// Result of [`bootstrap`]
#[derive(Debug)]
pub struct Bootstrapped<T> {
    /// Whatever the mount step returned
    pub mounted: T,
    /// Outcome of the analytics init call
    pub analytics: Result<(), AnalyticsError>,
}

impl<T> Bootstrapped<T> {
    pub fn analytics_ready(&self) -> bool {
        self.analytics.is_ok()
    }
}

/// Initialize analytics, then mount.
///
/// `mount` runs exactly once whatever the analytics outcome.
pub fn bootstrap<A, F, T>(analytics: &mut A, config: &AnalyticsConfig, mount: F) -> Bootstrapped<T>
where
    A: Analytics + ?Sized,
    F: FnOnce() -> T,
{
    let outcome = analytics.init(config);
    match &outcome {
        Ok(()) => tracing::info!("Analytics initialized"),
        Err(e) => tracing::error!(error = %e, "Failed to initialize analytics"),
    }

    Bootstrapped {
        mounted: mount(),
        analytics: outcome,
    }
}
