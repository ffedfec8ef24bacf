use keep::session::SessionUser;
use leptos::prelude::*;

mod anchor;
mod codex;
mod dashboard;
mod files;
mod gear_lock;
mod gemini;
mod journal;
mod knight;
mod ladder;
mod login;
mod mood;
mod reframe;
mod settings;
mod shell;
mod storage;
mod tach_lock;
mod vault;

use dashboard::DashboardPage;
use journal::JournalPage;
use login::LoginView;
use settings::SettingsPage;
use shell::{Sidebar, ToastStack, Topbar};
use vault::VaultPage;

const LOCALSTORAGE_SESSION_KEY: &str = "keep.session.v1";
const LOCALSTORAGE_SETTINGS_KEY: &str = "keep.settings.v1";

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn as_attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    fn toggle(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Dashboard,
    Journal,
    Vault,
    Settings,
}

impl Page {
    fn all() -> [Page; 4] {
        [Page::Dashboard, Page::Journal, Page::Vault, Page::Settings]
    }

    fn display_name(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Journal => "Journal",
            Page::Vault => "The Garage",
            Page::Settings => "Settings",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "🏰",
            Page::Journal => "📜",
            Page::Vault => "🔐",
            Page::Settings => "⚙️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    id: u64,
    message: String,
    level: ToastLevel,
}

/// Toast stack handle, cheap to copy into any widget that reports outcomes.
#[derive(Clone, Copy)]
struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            list: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.set_value(id + 1);
        self.list.update(|ts| {
            ts.push(Toast {
                id,
                message: message.into(),
                level,
            });
            // Keep the stack short; old toasts just fall off.
            if ts.len() > 4 {
                ts.remove(0);
            }
        });
    }
}

#[component]
fn App() -> impl IntoView {
    let (session, set_session) = signal(storage::load_session());
    let (page, set_page) = signal(Page::Dashboard);
    let (sidebar_open, set_sidebar_open) = signal(false);

    let initial_settings = storage::load_persisted_settings().unwrap_or_default();
    let (theme, set_theme) = signal(
        storage::parse_theme_pref(&initial_settings.theme).unwrap_or(Theme::Dark),
    );
    let settings = RwSignal::new(initial_settings);
    let toasts = Toasts::new();

    // Theme changes hit the document and the persisted settings together.
    Effect::new(move |_| {
        let t = theme.get();
        storage::apply_theme_to_document(t);
        settings.update(|s| s.theme = t.as_attr().to_string());
        storage::save_persisted_settings(&settings.get_untracked());
    });

    let on_login = Callback::new(move |user: SessionUser| {
        storage::save_session(&user);
        set_session.set(Some(user));
        // `page` is left untouched, so login lands on whatever the user was
        // trying to reach.
    });

    let on_logout = Callback::new(move |()| {
        storage::clear_session();
        set_session.set(None);
        set_sidebar_open.set(false);
    });

    view! {
        <div class="app">
            {move || match session.get() {
                None => view! { <LoginView on_login=on_login /> }.into_any(),
                Some(user) => {
                    let topbar_user = user.clone();
                    view! {
                        <Topbar
                            user=topbar_user
                            sidebar_open=sidebar_open
                            set_sidebar_open=set_sidebar_open
                            theme=theme
                            set_theme=set_theme
                            on_logout=on_logout
                        />
                        <Sidebar
                            page=page
                            set_page=set_page
                            sidebar_open=sidebar_open
                            set_sidebar_open=set_sidebar_open
                        />
                        <main class="app-main">
                            {
                                let user = user.clone();
                                move || match page.get() {
                                    Page::Dashboard => {
                                        let user = user.clone();
                                        view! {
                                            <DashboardPage user=user settings=settings toasts=toasts />
                                        }
                                            .into_any()
                                    }
                                    Page::Journal => {
                                        view! { <JournalPage settings=settings toasts=toasts /> }
                                            .into_any()
                                    }
                                    Page::Vault => {
                                        view! { <VaultPage toasts=toasts /> }.into_any()
                                    }
                                    Page::Settings => {
                                        view! { <SettingsPage settings=settings toasts=toasts /> }
                                            .into_any()
                                    }
                                }
                            }
                        </main>
                    }
                        .into_any()
                }
            }}
            <ToastStack toasts=toasts />
        </div>
    }
}
