use keep::breathing::{BreathPhase, BreathingCycle};
use keep::content::{MANTRA_SUGGESTIONS, SENSE_STEPS};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_time::Instant;

const BREATH_TICK_MS: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Technique {
    Senses,
    Mantra,
    Breathing,
}

impl Technique {
    fn all() -> [Technique; 3] {
        [Technique::Senses, Technique::Mantra, Technique::Breathing]
    }

    fn label(self) -> &'static str {
        match self {
            Technique::Senses => "5-4-3-2-1 Senses",
            Technique::Mantra => "Mantra Repetition",
            Technique::Breathing => "Deep Breathing",
        }
    }
}

struct BreathRuntime {
    cycle: BreathingCycle,
    last_tick: Option<Instant>,
}

/// Anchor: grounding exercises for overwhelming moments. The breathing
/// interval only runs while the exercise does, and teardown always stops it.
#[component]
pub(super) fn AnchorPanel() -> impl IntoView {
    let (technique, set_technique) = signal(Technique::Senses);

    // 5-4-3-2-1: one string slot per requested observation.
    let sense_inputs = RwSignal::new(
        SENSE_STEPS
            .iter()
            .map(|&(_, n)| vec![String::new(); n])
            .collect::<Vec<_>>(),
    );

    let (mantra, set_mantra) = signal(String::new());

    let runtime = StoredValue::new(BreathRuntime {
        cycle: BreathingCycle::new(),
        last_tick: None,
    });
    let (breathing, set_breathing) = signal(false);
    let (phase, set_phase) = signal(BreathPhase::Inhale);
    let (progress, set_progress) = signal(0.0f32);
    let (interval_id, set_interval_id) = signal::<Option<i32>>(None);

    let stop_breathing = move || {
        if let Some(id) = interval_id.get_untracked() {
            if let Some(w) = web_sys::window() {
                w.clear_interval_with_handle(id);
            }
            set_interval_id.set(None);
        }
        runtime.update_value(|r| {
            r.cycle.stop();
            r.last_tick = None;
        });
        set_breathing.set(false);
        set_phase.set(BreathPhase::Inhale);
        set_progress.set(0.0);
    };

    let start_breathing = move || {
        if interval_id.get_untracked().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        runtime.update_value(|r| {
            r.cycle.start();
            r.last_tick = None;
        });
        set_breathing.set(true);

        let cb = Closure::wrap(Box::new(move || {
            runtime.update_value(|r| {
                let now = Instant::now();
                let dt = r
                    .last_tick
                    .map(|t| now.duration_since(t).as_secs_f32())
                    .unwrap_or(0.0);
                r.last_tick = Some(now);
                r.cycle.advance(dt);
                set_phase.set(r.cycle.phase());
                set_progress.set(r.cycle.phase_progress());
            });
        }) as Box<dyn FnMut()>);

        if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            BREATH_TICK_MS,
        ) {
            cb.forget();
            set_interval_id.set(Some(id));
        }
    };

    on_cleanup(move || stop_breathing());

    let circle_size = move || {
        let p = progress.get();
        match phase.get() {
            BreathPhase::Inhale => 50.0 + 100.0 * p,
            BreathPhase::Hold => 150.0,
            BreathPhase::Exhale => 150.0 - 100.0 * p,
        }
    };

    view! {
        <div class="panel anchor-panel">
            <h3 class="panel-title">"⚓ Anchor - Grounding Exercises"</h3>
            <p class="panel-blurb">
                "Use these grounding techniques when feeling overwhelmed or anxious to bring yourself back to the present moment."
            </p>

            <div class="tab-row">
                {Technique::all()
                    .iter()
                    .map(|&t| {
                        view! {
                            <button
                                class=move || {
                                    if technique.get() == t { "tab active" } else { "tab" }
                                }
                                on:click=move |_| set_technique.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || technique.get() == Technique::Senses>
                {SENSE_STEPS
                    .iter()
                    .enumerate()
                    .map(|(step, &(label, count))| {
                        view! {
                            <div class="sense-step">
                                <div class=move || {
                                    let done = sense_inputs
                                        .with(|s| s[step].iter().all(|v| !v.trim().is_empty()));
                                    if done { "sense-count done" } else { "sense-count" }
                                }>{count}</div>
                                <div class="sense-body">
                                    <div class="sense-label">{label}</div>
                                    {(0..count)
                                        .map(|slot| {
                                            view! {
                                                <input
                                                    type="text"
                                                    placeholder="Something you notice..."
                                                    prop:value=move || {
                                                        sense_inputs.with(|s| s[step][slot].clone())
                                                    }
                                                    on:input=move |ev| {
                                                        let v = event_target_value(&ev);
                                                        sense_inputs.update(|s| s[step][slot] = v);
                                                    }
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </Show>

            <Show when=move || technique.get() == Technique::Mantra>
                <textarea
                    class="mantra-input"
                    placeholder="Write a mantra to repeat to yourself..."
                    prop:value=move || mantra.get()
                    on:input=move |ev| set_mantra.set(event_target_value(&ev))
                ></textarea>
                <div class="mantra-suggestions">
                    {MANTRA_SUGGESTIONS
                        .iter()
                        .map(|&s| {
                            view! {
                                <button class="btn sm ghost" on:click=move |_| set_mantra.set(s.to_string())>
                                    {s}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <Show when=move || technique.get() == Technique::Breathing>
                <div class="breathing-stage">
                    <div
                        class="breathing-circle"
                        style=move || {
                            let d = circle_size();
                            format!("width: {d:.0}px; height: {d:.0}px;")
                        }
                    ></div>
                    <div class="breathing-instruction">
                        {move || if breathing.get() { phase.get().label() } else { "Ready when you are." }}
                    </div>
                    <button
                        class="btn"
                        on:click=move |_| {
                            if breathing.get_untracked() {
                                stop_breathing();
                            } else {
                                start_breathing();
                            }
                        }
                    >
                        {move || if breathing.get() { "Stop" } else { "Begin breathing" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
