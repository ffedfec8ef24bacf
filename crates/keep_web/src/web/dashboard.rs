use keep::session::SessionUser;
use leptos::prelude::*;

use super::anchor::AnchorPanel;
use super::codex::CodexPanel;
use super::knight::KnightPanel;
use super::ladder::LadderPanel;
use super::mood::MoodPanel;
use super::reframe::ReframeForge;
use super::storage::PersistedSettings;
use super::Toasts;

/// The keep's main hall: independent widgets, each owning its own state.
#[component]
pub(super) fn DashboardPage(
    user: SessionUser,
    settings: RwSignal<PersistedSettings>,
    toasts: Toasts,
) -> impl IntoView {
    let greeting = format!("Welcome back, {}", user.name);

    view! {
        <section class="page dashboard-page">
            <div class="page-header">
                <h2>{greeting}</h2>
                <p class="subtle">
                    "Your journey continues at Eric's Keep. Tend the mind, then tune the Evo."
                </p>
            </div>

            <div class="dashboard-grid">
                <KnightPanel user=user.clone() />
                <MoodPanel />
                <CodexPanel />
                <ReframeForge settings=settings toasts=toasts />
                <AnchorPanel />
                <LadderPanel settings=settings toasts=toasts />
            </div>
        </section>
    }
}
