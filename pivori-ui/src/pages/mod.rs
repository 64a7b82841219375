//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod services;
pub mod settings;

pub use dashboard::Dashboard;
pub use services::Services;
pub use settings::Settings;
