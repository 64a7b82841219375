//! # Pivori Studio
//!
//! Service dashboard for the Pivori backends. This crate holds the
//! platform-independent core shared with the Leptos frontend in
//! `pivori-ui/`, plus the static host that serves the built bundle.
//!
//! ## Modules
//!
//! - [`router`]: Route table binding paths to pages
//! - [`catalog`]: Service records and the dashboard summary
//! - [`settings`]: Settings values and the save command
//! - [`analytics`]: Best-effort analytics bootstrap
//! - [`server`]: Static host with Axum (feature `server`)
//! - [`config`]: TOML + environment configuration (feature `server`)
//!
//! ## Quick Start
//!
//! ```rust
//! use pivori_studio::router::{Outlet, Page};
//! use pivori_studio::catalog::services;
//!
//! assert_eq!(Outlet::resolve("/services"), Outlet::Page(Page::Services));
//!
//! for service in services() {
//!     println!("{} :{} {}", service.name, service.port, service.status);
//! }
//! ```

pub mod analytics;
pub mod catalog;
pub mod router;
pub mod settings;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use analytics::{bootstrap, Analytics, AnalyticsConfig, AnalyticsError, Bootstrapped};
pub use catalog::{services, DashboardSummary, ServiceRecord, ServiceStatus};
pub use router::{nav_links, NavLink, Outlet, Page};
pub use settings::{
    save_settings, MemorySettingsStore, Settings, SettingsError, SettingsStore, Theme,
};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, ConfigSource, LoggingConfig};
#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerConfig, ServerError};
