//! Settings Page
//!
//! API URL and theme form. Submitting runs the save command instead of a
//! browser form submission, so the page never reloads.

use leptos::*;
use pivori_studio::settings::Theme;

use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let saved = state.saved_settings();
    let (api_url, set_api_url) = create_signal(saved.api_url);
    let (theme, set_theme) = create_signal(saved.theme.to_string());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match state.save_settings(&api_url.get_untracked(), &theme.get_untracked()) {
            Ok(settings) => {
                set_api_url.set(settings.api_url);
                state.show_success("Settings saved");
            }
            Err(e) => state.show_error(&e.to_string()),
        }
    };

    view! {
        <div>
            <h2 class="text-3xl font-bold mb-6">"Settings"</h2>

            <div class="bg-white p-6 rounded shadow max-w-md">
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label for="api-url" class="block font-bold mb-2">"API URL"</label>
                        <input
                            id="api-url"
                            name="api_url"
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="w-full border rounded px-3 py-2"
                        />
                    </div>

                    <div>
                        <label for="theme" class="block font-bold mb-2">"Theme"</label>
                        <select
                            id="theme"
                            name="theme"
                            on:change=move |ev| set_theme.set(event_target_value(&ev))
                            class="w-full border rounded px-3 py-2"
                        >
                            {Theme::ALL
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option
                                            value=option.as_str()
                                            selected=move || theme.get() == option.as_str()
                                        >
                                            {option.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <button
                        type="submit"
                        class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700"
                    >
                        "Save"
                    </button>
                </form>
            </div>
        </div>
    }
}
