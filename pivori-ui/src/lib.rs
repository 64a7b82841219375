//! Pivori Studio Dashboard components
//!
//! Navigation shell, pages and browser glue. The binary in `main.rs`
//! mounts [`App`]; browser tests mount the pieces directly.

pub mod analytics;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;

pub use app::{App, Shell};
