//! Services Page
//!
//! Table of the monitored services, in catalog order.

use leptos::*;
use pivori_studio::catalog::{services, ServiceRecord};

use crate::components::StatusBadge;

/// Services page component
#[component]
pub fn Services() -> impl IntoView {
    view! {
        <div>
            <h2 class="text-3xl font-bold mb-6">"Services"</h2>

            <div class="bg-white rounded shadow overflow-hidden">
                <table class="w-full">
                    <thead class="bg-gray-100">
                        <tr>
                            <th class="px-6 py-3 text-left">"Service"</th>
                            <th class="px-6 py-3 text-left">"Port"</th>
                            <th class="px-6 py-3 text-left">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {services()
                            .iter()
                            .map(|service| view! { <ServiceRow service=*service /> })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn ServiceRow(service: ServiceRecord) -> impl IntoView {
    view! {
        <tr class="border-t">
            <td class="px-6 py-3">{service.name}</td>
            <td class="px-6 py-3">{service.port}</td>
            <td class="px-6 py-3">
                <StatusBadge status=service.status />
            </td>
        </tr>
    }
}
