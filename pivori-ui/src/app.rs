//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use pivori_studio::router::{Outlet, Page};

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Services, Settings};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <LocationShell />
        </Router>
    }
}

/// Feeds the browser location into the shell
#[component]
fn LocationShell() -> impl IntoView {
    let location = use_location();

    view! { <Shell path=location.pathname /> }
}

/// Navigation header plus the outlet for `path`.
///
/// The header is created once; path changes only swap the `<main>` content.
#[component]
pub fn Shell(
    /// Current location path
    #[prop(into)]
    path: Signal<String>,
) -> impl IntoView {
    let outlet = create_memo(move |_| Outlet::resolve(&path.get()));

    view! {
        <div class="min-h-screen bg-gray-50">
            <Nav path=path />

            <main class="container mx-auto py-8">
                {move || match outlet.get() {
                    Outlet::Page(Page::Dashboard) => view! { <Dashboard /> }.into_view(),
                    Outlet::Page(Page::Services) => view! { <Services /> }.into_view(),
                    Outlet::Page(Page::Settings) => view! { <Settings /> }.into_view(),
                    Outlet::NotFound => view! { <NotFound /> }.into_view(),
                }}
            </main>

            <Toast />
        </div>
    }
}

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h2 class="text-3xl font-bold mb-2">"Page Not Found"</h2>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=Page::Dashboard.path()
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded font-medium"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
