use leptos::prelude::*;

use super::storage::{self, PersistedSettings};
use super::{ToastLevel, Toasts};

/// App configuration: the generative model and its API key. Saved to local
/// storage; the key never leaves the browser except on the API call itself.
#[component]
pub(super) fn SettingsPage(
    settings: RwSignal<PersistedSettings>,
    toasts: Toasts,
) -> impl IntoView {
    let (model, set_model) = signal(settings.get_untracked().model);
    let (api_key, set_api_key) = signal(settings.get_untracked().api_key);

    let on_save = move |_| {
        settings.update(|s| {
            s.model = model.get_untracked().trim().to_string();
            s.api_key = api_key.get_untracked().trim().to_string();
        });
        storage::save_persisted_settings(&settings.get_untracked());
        toasts.push(ToastLevel::Success, "Settings saved");
    };

    view! {
        <section class="page settings-page">
            <div class="page-header">
                <h2>"Settings"</h2>
            </div>

            <div class="panel">
                <h3 class="panel-title">"Scribe's Assistant"</h3>
                <label class="field">
                    <span>"Model"</span>
                    <input
                        type="text"
                        prop:value=move || model.get()
                        on:input=move |ev| set_model.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"API key"</span>
                    <input
                        type="password"
                        autocomplete="off"
                        placeholder="Required for AI features"
                        prop:value=move || api_key.get()
                        on:input=move |ev| set_api_key.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn sm primary" on:click=on_save>
                    "Save"
                </button>
            </div>
        </section>
    }
}
