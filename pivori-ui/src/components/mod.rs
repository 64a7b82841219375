//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod metric_card;
pub mod nav;
pub mod status_badge;
pub mod toast;

pub use metric_card::{MetricCard, Tone};
pub use nav::Nav;
pub use status_badge::StatusBadge;
pub use toast::Toast;
