use keep::ai::reframe::{parse_reframe, ReframeRequest, ReframeResponse};
use keep::content::DISTORTION_PATTERNS;
use keep::wizard::{AiGate, StepWizard};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::gemini;
use super::storage::PersistedSettings;
use super::Toasts;

const STEP_TITLES: [&str; 3] = [
    "Identify the Negative Thought",
    "Spot the Thought Patterns",
    "Forge a Balanced Reframe",
];

/// Reframe Forge: a three-step CBT wizard with optional AI assistance.
///
/// One AI request may be in flight at a time; a failed request changes nothing
/// except raising a toast. Step progression is gated on each step's
/// completion predicate.
#[component]
pub(super) fn ReframeForge(
    settings: RwSignal<PersistedSettings>,
    toasts: Toasts,
) -> impl IntoView {
    let wizard = RwSignal::new(StepWizard::new(3));
    let gate = RwSignal::new(AiGate::new());

    let (thought, set_thought) = signal(String::new());
    let (context, set_context) = signal(String::new());
    let (reframed, set_reframed) = signal(String::new());
    let selected = RwSignal::new(Vec::<usize>::new());
    let ai_result = RwSignal::new(None::<ReframeResponse>);

    let loading = move || gate.with(|g| g.is_in_flight());

    let step_complete = move |step: u32| match step {
        1 => !thought.get().trim().is_empty(),
        2 => !selected.with(Vec::is_empty) || ai_result.with(Option::is_some),
        3 => !reframed.get().trim().is_empty() || ai_result.with(Option::is_some),
        _ => false,
    };

    let on_next = move |_| {
        let step = wizard.get_untracked().step();
        wizard.update(|w| {
            w.advance(step_complete(step));
        });
    };

    let on_back = move |_| wizard.update(StepWizard::retreat);

    let on_reset = move |_| {
        wizard.update(StepWizard::reset);
        set_thought.set(String::new());
        set_context.set(String::new());
        set_reframed.set(String::new());
        selected.set(Vec::new());
        ai_result.set(None);
    };

    let request_ai = move |_| {
        let thought_v = thought.get_untracked();
        if thought_v.trim().is_empty() {
            return;
        }
        if !gate.try_update(AiGate::begin).unwrap_or(false) {
            return;
        }

        let request = ReframeRequest::new(thought_v, context.get_untracked());
        let prompt = match request.prompt() {
            Ok(p) => p,
            Err(e) => {
                gate.update(AiGate::settle);
                gemini::report_ai_failure(toasts, "Reframe Forge", &e);
                return;
            }
        };
        let cfg = settings.get_untracked();

        spawn_local(async move {
            let outcome = match gemini::generate(&cfg, &prompt, true).await {
                Ok(raw) => parse_reframe(&raw),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(result) => {
                    let step = wizard.get_untracked().step();
                    if step >= 2 {
                        let matched: Vec<usize> = result
                            .distortions
                            .iter()
                            .filter_map(|d| {
                                DISTORTION_PATTERNS
                                    .iter()
                                    .position(|p| p.name.eq_ignore_ascii_case(d))
                            })
                            .collect();
                        if !matched.is_empty() {
                            selected.set(matched);
                        }
                    }
                    if step >= 3 && reframed.get_untracked().trim().is_empty() {
                        set_reframed.set(result.balanced_reframe.clone());
                    }
                    ai_result.set(Some(result));
                }
                Err(e) => gemini::report_ai_failure(toasts, "Reframe Forge", &e),
            }
            gate.update(AiGate::settle);
        });
    };

    let pattern_summary = move || {
        if let Some(r) = ai_result.get() {
            return r.distortions.join(", ");
        }
        selected
            .get()
            .iter()
            .map(|&i| DISTORTION_PATTERNS[i].name)
            .collect::<Vec<_>>()
            .join(", ")
    };

    view! {
        <div class="panel forge-panel" style="position: relative;">
            <Show when=loading>
                <div class="loading-overlay">
                    <div class="spinner"></div>
                </div>
            </Show>

            <h3 class="panel-title">"🔥 Reframe Forge"</h3>
            <p class="panel-blurb">
                "Transform negative thoughts into balanced perspectives using cognitive behavioral techniques."
            </p>

            <Show when=move || !wizard.with(StepWizard::is_completed)>
                {STEP_TITLES
                    .iter()
                    .enumerate()
                    .map(|(i, &title)| {
                        let step = i as u32 + 1;
                        view! {
                            <div class="forge-step">
                                <div class="step-header">
                                    <div class=move || {
                                        if wizard.with(|w| w.step()) == step {
                                            "step-number active"
                                        } else {
                                            "step-number"
                                        }
                                    }>{step}</div>
                                    <h4 class="step-title">{title}</h4>
                                </div>

                                <Show when=move || wizard.with(|w| w.step()) == step>
                                    <div class="step-content">
                                        {match step {
                                            1 => {
                                                view! {
                                                    <textarea
                                                        placeholder="Write down the negative thought that's bothering you..."
                                                        prop:value=move || thought.get()
                                                        on:input=move |ev| set_thought.set(event_target_value(&ev))
                                                    ></textarea>
                                                    <textarea
                                                        placeholder="Optional: add some context about the situation..."
                                                        prop:value=move || context.get()
                                                        on:input=move |ev| set_context.set(event_target_value(&ev))
                                                    ></textarea>
                                                }
                                                    .into_any()
                                            }
                                            2 => {
                                                view! {
                                                    <div class="pattern-grid">
                                                        {DISTORTION_PATTERNS
                                                            .iter()
                                                            .enumerate()
                                                            .map(|(i, p)| {
                                                                view! {
                                                                    <button
                                                                        class=move || {
                                                                            if selected.with(|s| s.contains(&i)) {
                                                                                "pattern-chip active"
                                                                            } else {
                                                                                "pattern-chip"
                                                                            }
                                                                        }
                                                                        title=p.description
                                                                        on:click=move |_| {
                                                                            selected
                                                                                .update(|s| {
                                                                                    if let Some(pos) = s.iter().position(|&x| x == i) {
                                                                                        s.remove(pos);
                                                                                    } else {
                                                                                        s.push(i);
                                                                                    }
                                                                                })
                                                                        }
                                                                    >
                                                                        {p.name}
                                                                    </button>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                }
                                                    .into_any()
                                            }
                                            _ => {
                                                view! {
                                                    <textarea
                                                        placeholder="Write a more balanced version of the thought..."
                                                        prop:value=move || reframed.get()
                                                        on:input=move |ev| set_reframed.set(event_target_value(&ev))
                                                    ></textarea>
                                                }
                                                    .into_any()
                                            }
                                        }}

                                        <div class="btn-row">
                                            <Show when=move || step > 1>
                                                <button class="btn sm ghost" on:click=on_back>
                                                    "Back"
                                                </button>
                                            </Show>
                                            <button
                                                class="btn sm primary"
                                                disabled=move || !step_complete(step)
                                                on:click=on_next
                                            >
                                                {if step == 3 { "Complete" } else { "Next" }}
                                            </button>
                                            <button
                                                class="btn sm accent"
                                                disabled=move || {
                                                    loading() || thought.get().trim().is_empty()
                                                }
                                                on:click=request_ai
                                            >
                                                "✨ AI Assist"
                                            </button>
                                        </div>
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </Show>

            <Show when=move || wizard.with(StepWizard::is_completed)>
                <div class="forge-result">
                    <div class="thought before">
                        <div class="thought-header">"Before"</div>
                        <div class="thought-content">{move || thought.get()}</div>
                        <div class="thought-pattern">{pattern_summary}</div>
                    </div>
                    <div class="thought after">
                        <div class="thought-header">"After"</div>
                        <div class="thought-content">
                            {move || {
                                let own = reframed.get();
                                if own.trim().is_empty() {
                                    ai_result
                                        .get()
                                        .map(|r| r.balanced_reframe)
                                        .unwrap_or_default()
                                } else {
                                    own
                                }
                            }}
                        </div>
                    </div>

                    {move || {
                        ai_result
                            .get()
                            .map(|r| {
                                view! {
                                    <div class="evidence">
                                        <h5>"Evidence for"</h5>
                                        <ul>
                                            {r.evidence_for
                                                .iter()
                                                .map(|e| view! { <li>{e.clone()}</li> })
                                                .collect_view()}
                                        </ul>
                                        <h5>"Evidence against"</h5>
                                        <ul>
                                            {r.evidence_against
                                                .iter()
                                                .map(|e| view! { <li>{e.clone()}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                    {(!r.tiny_action.trim().is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="tiny-action">
                                                    <div class="action-header">"Tiny action"</div>
                                                    <div class="action-content">
                                                        {r.tiny_action.clone()}
                                                    </div>
                                                </div>
                                            }
                                        })}
                                    {(!r.safety_note.trim().is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="safety-note">
                                                    <div class="note-header">"A note on safety"</div>
                                                    <div class="note-content">
                                                        {r.safety_note.clone()}
                                                    </div>
                                                </div>
                                            }
                                        })}
                                }
                            })
                    }}

                    <button class="btn sm" on:click=on_reset>
                        "Forge another"
                    </button>
                </div>
            </Show>
        </div>
    }
}
