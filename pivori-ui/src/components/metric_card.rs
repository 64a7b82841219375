//! Metric Card Component
//!
//! Displays a single labeled summary value.

use leptos::*;

/// Colour of the value text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Primary,
    Good,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Primary => "text-2xl text-blue-600",
            Tone::Good => "text-2xl text-green-600",
        }
    }
}

/// Metric card component
#[component]
pub fn MetricCard(
    /// Label above the value
    label: &'static str,
    /// Value to display
    #[prop(into)]
    value: String,
    #[prop(optional)]
    tone: Tone,
) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded shadow">
            <h3 class="font-bold">{label}</h3>
            <p class=tone.class()>{value}</p>
        </div>
    }
}
