//! Navigation Component
//!
//! Header navigation bar with title and page links.

use leptos::*;
use leptos_router::*;
use pivori_studio::router::{nav_links, NavLink};

/// Navigation header component
#[component]
pub fn Nav(
    /// Current location path, used to highlight the active link
    #[prop(into)]
    path: Signal<String>,
) -> impl IntoView {
    view! {
        <nav class="bg-white shadow">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold text-blue-600">"Pivori Studio"</h1>

                <ul class="flex gap-6">
                    {nav_links()
                        .into_iter()
                        .map(|link| view! { <NavItem link=link path=path /> })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavItem(link: NavLink, path: Signal<String>) -> impl IntoView {
    view! {
        <li class=move || {
            if link.is_active(&path.get()) {
                "font-semibold text-blue-600"
            } else {
                "text-gray-700"
            }
        }>
            <A href=link.href class="hover:text-blue-600">
                {link.label}
            </A>
        </li>
    }
}
