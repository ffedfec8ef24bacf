use keep::content::{knight_rank, ACTIVE_QUESTS, DEFAULT_KNIGHT};
use keep::session::SessionUser;
use leptos::prelude::*;

/// Knight profile and XP gauge. The profile itself is mock data; only the
/// gauge math is live.
#[component]
pub(super) fn KnightPanel(user: SessionUser) -> impl IntoView {
    let profile = DEFAULT_KNIGHT;
    let xp_pct = (profile.xp as f32 / profile.xp_to_next as f32 * 100.0).clamp(0.0, 100.0);

    view! {
        <div class="panel knight-panel">
            <h3 class="panel-title">"Your Knight"</h3>
            <div class="knight-row">
                <img class="knight-avatar" src=user.avatar.clone() alt="" />
                <div class="knight-info">
                    <div class="knight-name">{user.name.clone()}</div>
                    <div class="knight-rank">
                        {knight_rank(profile.level)}" · Level "{profile.level}
                    </div>
                </div>
            </div>

            <div class="xp-bar">
                <div class="xp-fill" style=format!("width: {xp_pct:.0}%;")></div>
            </div>
            <div class="xp-text">{profile.xp}" / "{profile.xp_to_next}" XP"</div>

            <h4 class="panel-subtitle">"Active Quests"</h4>
            {ACTIVE_QUESTS
                .iter()
                .map(|q| {
                    let pct = (q.progress as f32 / q.total as f32 * 100.0).clamp(0.0, 100.0);
                    view! {
                        <div class="quest">
                            <div class="quest-head">
                                <span class="quest-name">{q.name}</span>
                                <span class="quest-reward">{q.reward}</span>
                            </div>
                            <div class="quest-desc">{q.description}</div>
                            <div class="quest-bar">
                                <div class="quest-fill" style=format!("width: {pct:.0}%;")></div>
                            </div>
                            <div class="quest-progress">{q.progress}" / "{q.total}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
