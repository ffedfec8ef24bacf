use keep::session::{self, SessionUser};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub(super) fn LoginView(on_login: Callback<SessionUser>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match session::authenticate(&username.get_untracked(), &password.get_untracked()) {
            Ok(user) => {
                set_error.set(String::new());
                on_login.run(user);
            }
            Err(e) => set_error.set(e.to_string()),
        }
    };

    view! {
        <div class="login-screen">
            <form class="login-card" on:submit=on_submit>
                <h1 class="brand">"Eric's Keep"</h1>
                <p class="subtle">"Enter the keep, chosen undead."</p>

                <label class="field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || !error.get().is_empty()>
                    <div class="field-error">{move || error.get()}</div>
                </Show>

                <button class="btn primary" type="submit">
                    "Enter"
                </button>

                <p class="subtle login-hint">
                    "Demo accounts: admin / password123, user / password123"
                </p>
            </form>
        </div>
    }
}
