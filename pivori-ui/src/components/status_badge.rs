//! Status Badge Component

use leptos::*;
use pivori_studio::catalog::ServiceStatus;

/// Coloured pill showing a service status
#[component]
pub fn StatusBadge(status: ServiceStatus) -> impl IntoView {
    let colors = match status {
        ServiceStatus::Healthy => "bg-green-100 text-green-800",
        ServiceStatus::Degraded => "bg-yellow-100 text-yellow-800",
        ServiceStatus::Down => "bg-red-100 text-red-800",
    };

    view! {
        <span class=format!("px-3 py-1 rounded {}", colors)>{status.as_str()}</span>
    }
}
