use keep::ai::ladder::{parse_ladder, LadderRequest, LadderStep};
use keep::content::seed_ladder;
use keep::wizard::AiGate;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::gemini;
use super::storage::PersistedSettings;
use super::Toasts;

#[derive(Debug, Clone, PartialEq, Eq)]
struct LadderItem {
    id: u64,
    step: LadderStep,
    done: bool,
}

fn items_from_steps(steps: Vec<LadderStep>) -> Vec<LadderItem> {
    steps
        .into_iter()
        .enumerate()
        .map(|(i, mut step)| {
            step.step = i as u32 + 1;
            LadderItem {
                id: i as u64,
                step,
                done: false,
            }
        })
        .collect()
}

/// Exposure-ladder builder: break a fear into graduated steps, check them off,
/// or have the AI draft a ladder from the fear/goal/constraints fields.
#[component]
pub(super) fn LadderPanel(
    settings: RwSignal<PersistedSettings>,
    toasts: Toasts,
) -> impl IntoView {
    let seeded = items_from_steps(seed_ladder());
    let next_id = StoredValue::new(seeded.len() as u64);
    let items = RwSignal::new(seeded);
    let gate = RwSignal::new(AiGate::new());

    let (fear, set_fear) = signal("Fear of Spiders".to_string());
    let (goal, set_goal) = signal(
        "Be able to remain calm when encountering spiders".to_string(),
    );
    let (constraints, set_constraints) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (safety_note, set_safety_note) = signal(String::new());
    let (expanded, set_expanded) = signal::<Option<u64>>(None);
    let (show_add, set_show_add) = signal(false);

    let (new_title, set_new_title) = signal(String::new());
    let (new_action, set_new_action) = signal(String::new());
    let (new_prep, set_new_prep) = signal(String::new());
    let (new_duration, set_new_duration) = signal(String::new());
    let (new_suds_start, set_new_suds_start) = signal(String::new());
    let (new_suds_target, set_new_suds_target) = signal(String::new());

    let loading = move || gate.with(|g| g.is_in_flight());

    let progress = move || {
        items.with(|is| {
            let done = is.iter().filter(|i| i.done).count();
            (done, is.len())
        })
    };

    let on_add = move |ev: SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked().trim().to_string();
        let action = new_action.get_untracked().trim().to_string();
        if title.is_empty() || action.is_empty() {
            return;
        }
        let id = next_id.with_value(|id| *id);
        next_id.set_value(id + 1);
        items.update(|is| {
            is.push(LadderItem {
                id,
                step: LadderStep {
                    step: is.len() as u32 + 1,
                    title,
                    prep: new_prep.get_untracked().trim().to_string(),
                    action,
                    duration_min: new_duration.get_untracked().trim().parse().unwrap_or(10),
                    suds_start: new_suds_start.get_untracked().trim().parse().unwrap_or(5),
                    suds_target: new_suds_target.get_untracked().trim().parse().unwrap_or(3),
                    success_criteria: String::new(),
                },
                done: false,
            });
        });
        set_new_title.set(String::new());
        set_new_action.set(String::new());
        set_new_prep.set(String::new());
        set_new_duration.set(String::new());
        set_new_suds_start.set(String::new());
        set_new_suds_target.set(String::new());
        set_show_add.set(false);
    };

    let generate_ladder = move |_| {
        if !gate.try_update(AiGate::begin).unwrap_or(false) {
            return;
        }
        let request = LadderRequest::new(
            fear.get_untracked(),
            goal.get_untracked(),
            constraints.get_untracked(),
        );
        let prompt = match request.prompt() {
            Ok(p) => p,
            Err(e) => {
                gate.update(AiGate::settle);
                gemini::report_ai_failure(toasts, "Exposure ladder", &e);
                return;
            }
        };
        let cfg = settings.get_untracked();

        spawn_local(async move {
            let outcome = match gemini::generate(&cfg, &prompt, true).await {
                Ok(raw) => parse_ladder(&raw),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(result) => {
                    let fresh = items_from_steps(result.ladder);
                    next_id.set_value(fresh.len() as u64);
                    items.set(fresh);
                    set_notes.set(result.notes);
                    set_safety_note.set(result.safety_note);
                    set_expanded.set(None);
                }
                Err(e) => gemini::report_ai_failure(toasts, "Exposure ladder", &e),
            }
            gate.update(AiGate::settle);
        });
    };

    view! {
        <div class="panel ladder-panel" style="position: relative;">
            <Show when=loading>
                <div class="loading-overlay">
                    <div class="spinner"></div>
                </div>
            </Show>

            <h3 class="panel-title">"Exposure Ladder"</h3>
            <p class="panel-blurb">
                "Break down your fear into manageable steps. Start with the least anxiety-provoking step and work your way up."
            </p>

            <label class="field">
                <span>"Fear"</span>
                <input
                    type="text"
                    prop:value=move || fear.get()
                    on:input=move |ev| set_fear.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Goal"</span>
                <input
                    type="text"
                    prop:value=move || goal.get()
                    on:input=move |ev| set_goal.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Constraints"</span>
                <input
                    type="text"
                    placeholder="Anything the ladder must respect..."
                    prop:value=move || constraints.get()
                    on:input=move |ev| set_constraints.set(event_target_value(&ev))
                />
            </label>

            <div class="btn-row">
                <button
                    class="btn sm accent"
                    disabled=move || loading() || fear.get().trim().is_empty()
                    on:click=generate_ladder
                >
                    "✨ Generate with AI"
                </button>
                <button class="btn sm" on:click=move |_| set_show_add.set(!show_add.get())>
                    "Add step"
                </button>
            </div>

            <Show when=move || show_add.get()>
                <form class="ladder-form" on:submit=on_add>
                    <input
                        type="text"
                        placeholder="Step title"
                        prop:value=move || new_title.get()
                        on:input=move |ev| set_new_title.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="What to do"
                        prop:value=move || new_action.get()
                        on:input=move |ev| set_new_action.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="How to prepare (optional)"
                        prop:value=move || new_prep.get()
                        on:input=move |ev| set_new_prep.set(event_target_value(&ev))
                    />
                    <div class="field-row">
                        <input
                            type="number"
                            min="1"
                            max="120"
                            placeholder="Minutes"
                            prop:value=move || new_duration.get()
                            on:input=move |ev| set_new_duration.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            min="0"
                            max="10"
                            placeholder="SUDS start"
                            prop:value=move || new_suds_start.get()
                            on:input=move |ev| set_new_suds_start.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            min="0"
                            max="10"
                            placeholder="SUDS target"
                            prop:value=move || new_suds_target.get()
                            on:input=move |ev| set_new_suds_target.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="btn-row">
                        <button class="btn sm primary" type="submit">
                            "Save step"
                        </button>
                        <button
                            class="btn sm ghost"
                            type="button"
                            on:click=move |_| set_show_add.set(false)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>

            <div class="ladder-progress">
                {move || {
                    let (done, total) = progress();
                    let pct = if total == 0 { 0.0 } else { done as f32 / total as f32 * 100.0 };
                    format!("{done} of {total} steps completed ({pct:.0}%)")
                }}
            </div>

            <For
                each=move || items.get()
                key=|i| (i.id, i.done)
                children=move |item| {
                    let id = item.id;
                    let step = item.step.clone();
                    let done = item.done;
                    let prep = step.prep.clone();
                    let success = step.success_criteria.clone();
                    view! {
                        <div class=if done { "ladder-step done" } else { "ladder-step" }>
                            <div class="ladder-step-head">
                                <input
                                    type="checkbox"
                                    prop:checked=done
                                    on:change=move |_| {
                                        items
                                            .update(|is| {
                                                if let Some(i) = is.iter_mut().find(|i| i.id == id) {
                                                    i.done = !i.done;
                                                }
                                            })
                                    }
                                />
                                <span class="ladder-step-title">
                                    {step.step}". "{step.title.clone()}
                                </span>
                                <span class="ladder-step-suds">
                                    "SUDS "{step.suds_start}"/10 → "{step.suds_target}"/10"
                                </span>
                                <button
                                    class="icon-btn"
                                    title="Details"
                                    on:click=move |_| {
                                        set_expanded
                                            .set(
                                                if expanded.get_untracked() == Some(id) {
                                                    None
                                                } else {
                                                    Some(id)
                                                },
                                            )
                                    }
                                >
                                    "▾"
                                </button>
                                <button
                                    class="icon-btn"
                                    title="Remove"
                                    on:click=move |_| {
                                        items
                                            .update(|is| {
                                                is.retain(|i| i.id != id);
                                                for (n, i) in is.iter_mut().enumerate() {
                                                    i.step.step = n as u32 + 1;
                                                }
                                            })
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                            <div
                                class="ladder-step-body"
                                style=move || {
                                    if expanded.get() == Some(id) { "" } else { "display: none;" }
                                }
                            >
                                <div>
                                    <strong>"Do: "</strong>
                                    {step.action.clone()}
                                    " ("
                                    {step.duration_min}
                                    " min)"
                                </div>
                                {(!prep.trim().is_empty())
                                    .then(|| {
                                        view! {
                                            <div>
                                                <strong>"Prepare: "</strong>
                                                {prep.clone()}
                                            </div>
                                        }
                                    })}
                                {(!success.trim().is_empty())
                                    .then(|| {
                                        view! {
                                            <div>
                                                <strong>"Success looks like: "</strong>
                                                {success.clone()}
                                            </div>
                                        }
                                    })}
                            </div>
                        </div>
                    }
                }
            />

            <Show when=move || !notes.get().is_empty()>
                <p class="ladder-notes">{move || notes.get()}</p>
            </Show>
            <Show when=move || !safety_note.get().is_empty()>
                <div class="safety-note">
                    <div class="note-header">"A note on safety"</div>
                    <div class="note-content">{move || safety_note.get()}</div>
                </div>
            </Show>
        </div>
    }
}
