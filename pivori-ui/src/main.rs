//! Pivori Studio Dashboard
//!
//! Service dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Build with `trunk build`; the `pivori-studio serve` host
//! serves the resulting `dist/` directory.

use leptos::*;
use pivori_studio::analytics::bootstrap;
use pivori_ui::analytics::{self, BrowserAnalytics};
use pivori_ui::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Analytics is best effort; the app mounts whatever happens
    let mut client = BrowserAnalytics::default();
    let boot = bootstrap(&mut client, &analytics::config(), || {
        mount_to_body(|| view! { <App /> })
    });

    match boot.analytics {
        Ok(()) => web_sys::console::log_1(&"✅ Analytics initialized".into()),
        Err(e) => web_sys::console::error_1(
            &format!("❌ Failed to initialize analytics: {}", e).into(),
        ),
    }
}
