use keep::lock::{InputOutcome, LockEvent, SequenceLock};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_time::Instant;

const TICK_MS: i32 = 100;
const GEAR_TARGETS: [u16; 3] = [1, 3, 5];
const GEARS: [u16; 6] = [1, 2, 3, 4, 5, 6];

struct GearRuntime {
    lock: SequenceLock,
    last_tick: Option<Instant>,
}

/// Gear-shifter combination lock: click the gears of an H-pattern in the
/// target order. A wrong shift refuses the input and snaps the whole sequence
/// back after a short delay; the interval only exists to land those delays and
/// is cancelled on teardown.
#[component]
pub(super) fn GearShifterLock(on_unlock: Callback<()>) -> impl IntoView {
    let runtime = StoredValue::new(GearRuntime {
        lock: SequenceLock::gears(&GEAR_TARGETS).expect("target sequence is non-empty"),
        last_tick: None,
    });

    let (current_gear, set_current_gear) = signal::<Option<u16>>(None);
    let (completed, set_completed) = signal(0usize);
    let (refused, set_refused) = signal(false);
    let (unlocked, set_unlocked) = signal(false);
    let (message, set_message) = signal("Enter the gear sequence to unlock".to_string());
    let (message_class, set_message_class) = signal("status-msg info");
    let (interval_id, set_interval_id) = signal::<Option<i32>>(None);

    let do_tick = move || {
        let mut unlock_event = false;
        runtime.update_value(|r| {
            let now = Instant::now();
            let dt = r
                .last_tick
                .map(|t| now.duration_since(t).as_secs_f32())
                .unwrap_or(0.0);
            r.last_tick = Some(now);

            match r.lock.advance(dt) {
                Some(LockEvent::Reset) => {
                    set_message.set(format!(
                        "Sequence reset. Start with gear {}",
                        GEAR_TARGETS[0]
                    ));
                    set_message_class.set("status-msg info");
                }
                Some(LockEvent::Unlocked) => unlock_event = true,
                None => {}
            }
            set_completed.set(r.lock.completed_count());
            set_refused.set(r.lock.is_refused());
        });

        if unlock_event {
            on_unlock.run(());
        }
    };

    if let Some(window) = web_sys::window() {
        let cb = Closure::wrap(Box::new(do_tick) as Box<dyn FnMut()>);
        if let Ok(id) = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                TICK_MS,
            )
        {
            cb.forget();
            set_interval_id.set(Some(id));
        }
    }

    on_cleanup(move || {
        if let Some(id) = interval_id.get_untracked() {
            if let Some(w) = web_sys::window() {
                w.clear_interval_with_handle(id);
            }
        }
    });

    let select_gear = move |gear: u16| {
        if unlocked.get_untracked() {
            return;
        }
        set_current_gear.set(Some(gear));
        runtime.update_value(|r| {
            match r.lock.press(gear) {
                InputOutcome::Advanced => {
                    if let Some(next) = r.lock.current_target() {
                        set_message.set(format!("Good! Now shift to gear {next}"));
                        set_message_class.set("status-msg success");
                    }
                }
                InputOutcome::Unlocked => {
                    set_unlocked.set(true);
                    set_message.set("Sequence matched! Access granted.".to_string());
                    set_message_class.set("status-msg success");
                }
                InputOutcome::Refused => {
                    if let Some(target) = r.lock.current_target() {
                        set_message.set(format!("Wrong gear! Try again. Shift to gear {target}"));
                        set_message_class.set("status-msg error");
                    }
                }
                InputOutcome::Ignored => {}
            }
            set_completed.set(r.lock.completed_count());
            set_refused.set(r.lock.is_refused());
        });
    };

    let manual_reset = move |_| {
        runtime.update_value(|r| {
            r.lock.reset();
            set_completed.set(r.lock.completed_count());
            set_refused.set(r.lock.is_refused());
        });
        set_current_gear.set(None);
        set_message.set(format!("Sequence reset. Start with gear {}", GEAR_TARGETS[0]));
        set_message_class.set("status-msg info");
    };

    view! {
        <div class="lock-card">
            <h3 class="lock-title">"Evo IX Gear Shifter Security Lock"</h3>
            <p class="lock-description">
                "Enter the correct gear sequence to complete the authentication."
            </p>

            <div class="sequence-row">
                {GEAR_TARGETS
                    .iter()
                    .enumerate()
                    .map(|(i, &target)| {
                        view! {
                            <div class=move || {
                                if completed.get() > i {
                                    "sequence-step completed"
                                } else if completed.get() == i && !unlocked.get() && !refused.get() {
                                    "sequence-step active"
                                } else {
                                    "sequence-step"
                                }
                            }>{target}</div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="shifter-gate">
                {GEARS
                    .iter()
                    .map(|&gear| {
                        let seq_pos = GEAR_TARGETS.iter().position(|&t| t == gear);
                        view! {
                            <button
                                class=move || {
                                    let done = seq_pos.is_some_and(|p| completed.get() > p);
                                    if done {
                                        "gear-slot completed"
                                    } else if current_gear.get() == Some(gear) {
                                        "gear-slot active"
                                    } else {
                                        "gear-slot"
                                    }
                                }
                                on:click=move |_| select_gear(gear)
                            >
                                {gear}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class=move || message_class.get()>{move || message.get()}</div>

            <button class="btn ghost" disabled=move || unlocked.get() on:click=manual_reset>
                "Reset to Neutral"
            </button>
        </div>
    }
}
