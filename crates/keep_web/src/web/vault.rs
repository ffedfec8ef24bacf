use keep::content::{FileKind, NoteTone, VAULT_FILES, VAULT_NOTES};
use leptos::prelude::*;

use super::files;
use super::gear_lock::GearShifterLock;
use super::tach_lock::TachLockWidget;
use super::{ToastLevel, Toasts};

/// The secure garage: two combination locks back to back, then the mock
/// file/notes view. Each lock's unlock callback fires once per mount; swapping
/// to the next stage unmounts the previous widget and with it its interval.
#[component]
pub(super) fn VaultPage(toasts: Toasts) -> impl IntoView {
    let (stage, set_stage) = signal(1u8);
    let (unlocked, set_unlocked) = signal(false);

    let on_tach_unlock = Callback::new(move |()| set_stage.set(2));
    let on_gear_unlock = Callback::new(move |()| set_unlocked.set(true));

    view! {
        <section class="page vault-page">
            <div class="page-header">
                <h2>"The Garage"</h2>
            </div>

            {move || {
                if !unlocked.get() {
                    if stage.get() == 1 {
                        view! { <TachLockWidget on_unlock=on_tach_unlock /> }.into_any()
                    } else {
                        view! { <GearShifterLock on_unlock=on_gear_unlock /> }.into_any()
                    }
                } else {
                    view! { <VaultContents toasts=toasts /> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn VaultContents(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="vault-grid">
            <div class="panel">
                <h3 class="panel-title">"Secure Files"</h3>
                <ul class="file-list">
                    {VAULT_FILES
                        .iter()
                        .map(|f| {
                            let icon = match f.kind {
                                FileKind::Document => "📄",
                                FileKind::Image => "🖼️",
                            };
                            view! {
                                <li class="file-item">
                                    <span class="file-icon">{icon}</span>
                                    <span class="file-name">{f.name}</span>
                                    <span class="file-meta">{f.size}" · "{f.date}</span>
                                    <button
                                        class="icon-btn"
                                        title="Download"
                                        on:click=move |_| {
                                            let body = format!(
                                                "{} ({}, {})\n\nMock vault contents.\n",
                                                f.name,
                                                f.size,
                                                f.date,
                                            );
                                            if let Err(e) = files::download_text(f.name, &body) {
                                                toasts.push(ToastLevel::Error, e);
                                            }
                                        }
                                    >
                                        "📥"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class="panel">
                <h3 class="panel-title">"Notes"</h3>
                {VAULT_NOTES
                    .iter()
                    .map(|n| {
                        let tone_class = match n.tone {
                            NoteTone::Blue => "vault-note blue",
                            NoteTone::Red => "vault-note red",
                            NoteTone::Yellow => "vault-note yellow",
                        };
                        view! {
                            <div class=tone_class>
                                <div class="note-title">{n.title}</div>
                                <div class="note-body">{n.body}</div>
                                <div class="note-date">{n.date}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
