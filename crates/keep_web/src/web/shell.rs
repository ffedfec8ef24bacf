use keep::session::SessionUser;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use super::{Page, Theme, ToastLevel, Toasts};

#[component]
pub(super) fn Topbar(
    user: SessionUser,
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let role_badge = if user.is_admin() { "admin" } else { "knight" };
    let display_name = user.name.clone();
    let avatar = user.avatar.clone();

    view! {
        <header class="app-header">
            <div class="app-header-left">
                <button
                    class="icon-btn sidebar-toggle"
                    title="Menu"
                    on:click=move |_| set_sidebar_open.set(!sidebar_open.get())
                >
                    "☰"
                </button>
                <h1 class="brand">"Eric's Keep"</h1>
                <span class="subtle">{role_badge}</span>
            </div>
            <div class="app-header-right">
                <img class="avatar" src=avatar alt="" aria-hidden="true" />
                <span class="status">{display_name}</span>
                <button
                    class="btn sm ghost"
                    title=move || format!("Theme: {}", theme.get().label())
                    on:click=move |_| set_theme.set(theme.get().toggle())
                >
                    {move || theme.get().icon()}" "{move || theme.get().label()}
                </button>
                <button class="btn sm" on:click=move |_| on_logout.run(())>
                    "Log out"
                </button>
            </div>
        </header>
    }
}

#[component]
pub(super) fn Sidebar(
    page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        // Sidebar overlay (mobile)
        <div
            class=move || {
                if sidebar_open.get() {
                    "sidebar-overlay open"
                } else {
                    "sidebar-overlay"
                }
            }
            on:click=move |_| set_sidebar_open.set(false)
        ></div>

        <aside class=move || if sidebar_open.get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <div class="sidebar-title">"The Keep"</div>
            </div>

            <div class="sidebar-section">
                {Page::all()
                    .iter()
                    .map(|&target| {
                        view! {
                            <div
                                class=move || {
                                    if page.get() == target {
                                        "sidebar-item active"
                                    } else {
                                        "sidebar-item"
                                    }
                                }
                                role="button"
                                tabindex="0"
                                on:click=move |_| {
                                    set_page.set(target);
                                    set_sidebar_open.set(false);
                                }
                                on:keydown=move |ev: KeyboardEvent| {
                                    let key = ev.key();
                                    if key == "Enter" || key == " " {
                                        ev.prevent_default();
                                        set_page.set(target);
                                        set_sidebar_open.set(false);
                                    }
                                }
                            >
                                <span class="sidebar-label">{target.display_name()}</span>
                                <span class="sidebar-ico">{target.icon()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}

#[component]
pub(super) fn ToastStack(toasts: Toasts) -> impl IntoView {
    let list = toasts.list;
    view! {
        <div class="toast-stack" aria-live="polite" aria-relevant="additions removals">
            <For
                each=move || list.get()
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let class = match t.level {
                        ToastLevel::Info => "toast info",
                        ToastLevel::Success => "toast success",
                        ToastLevel::Error => "toast error",
                    };
                    view! {
                        <div class=class>
                            <div style="flex: 1; white-space: pre-wrap;">{t.message}</div>
                            <button
                                class="toast-close"
                                title="Dismiss"
                                on:click=move |_| list.update(|ts| ts.retain(|x| x.id != id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
