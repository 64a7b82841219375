//! Dashboard Page
//!
//! Headline numbers for the service fleet.

use leptos::*;
use pivori_studio::catalog::DashboardSummary;

use crate::components::{MetricCard, Tone};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let summary = DashboardSummary::current();

    view! {
        <div>
            <h2 class="text-3xl font-bold mb-6">"Dashboard"</h2>

            <div class="grid grid-cols-3 gap-4">
                <MetricCard label="Services" value=summary.services.to_string() />
                <MetricCard label="Healthy" value=summary.healthy.to_string() tone=Tone::Good />
                <MetricCard label="Uptime" value=summary.uptime tone=Tone::Good />
            </div>
        </div>
    }
}
