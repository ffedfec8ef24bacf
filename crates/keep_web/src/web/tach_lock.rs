use keep::engine::{EngineSim, Pedal, RPM_MAX};
use keep::lock::{InputOutcome, LockEvent, SequenceLock};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_time::Instant;

const TICK_MS: i32 = 50;
const RPM_TARGETS: [u16; 3] = [2500, 5000, 3000];
const RPM_TOLERANCE: u16 = 200;

struct TachRuntime {
    sim: EngineSim,
    lock: SequenceLock,
    last_tick: Option<Instant>,
}

impl TachRuntime {
    fn new() -> Self {
        Self {
            sim: EngineSim::new(),
            lock: SequenceLock::new(RPM_TARGETS.to_vec(), RPM_TOLERANCE)
                .expect("target sequence is non-empty"),
            last_tick: None,
        }
    }
}

/// Tachometer combination lock: hold the gas and brake pedals to sweep the
/// needle onto each RPM target in order. The whole widget runs off one
/// interval; the pedal state is a single enum, so gas and brake can never ramp
/// at the same time, and the interval dies with the widget.
#[component]
pub(super) fn TachLockWidget(on_unlock: Callback<()>) -> impl IntoView {
    let runtime = StoredValue::new(TachRuntime::new());

    let (rpm, set_rpm) = signal(0.0f32);
    let (completed, set_completed) = signal(0usize);
    let (unlocked, set_unlocked) = signal(false);
    let (message, set_message) = signal("Match the RPM sequence to unlock".to_string());
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

            let value = r.sim.advance(dt);
            set_rpm.set(value);

            match r.lock.observe(value.round() as u16) {
                InputOutcome::Advanced => {
                    if let Some(next) = r.lock.current_target() {
                        set_message.set(format!("Good! Now match {next} RPM"));
                        set_message_class.set("status-msg success");
                    }
                }
                InputOutcome::Unlocked => {
                    set_unlocked.set(true);
                    set_message.set("Sequence matched! Access granted.".to_string());
                    set_message_class.set("status-msg success");
                }
                _ => {}
            }

            if r.lock.advance(dt) == Some(LockEvent::Unlocked) {
                unlock_event = true;
            }
            set_completed.set(r.lock.completed_count());
        });

        // Fire-once per mount: the lock's terminal state never re-emits.
        if unlock_event {
            on_unlock.run(());
        }
    };

    // Single tick source for the RPM ramp and the lock's delays.
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

    let set_pedal = move |pedal: Pedal| {
        runtime.update_value(|r| r.sim.set_pedal(pedal));
    };

    let needle_rotation = move || -90.0 + (rpm.get() / RPM_MAX) * 180.0;

    view! {
        <div class="lock-card">
            <h3 class="lock-title">"Evo IX Tachometer Security Lock"</h3>
            <p class="lock-description">
                "Match the RPM sequence using the gas and brake pedals to access the secure garage."
            </p>

            <div class="sequence-row">
                {RPM_TARGETS
                    .iter()
                    .enumerate()
                    .map(|(i, _)| {
                        view! {
                            <div class=move || {
                                if completed.get() > i {
                                    "sequence-step completed"
                                } else if completed.get() == i && !unlocked.get() {
                                    "sequence-step active"
                                } else {
                                    "sequence-step"
                                }
                            }>{i + 1}</div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="tachometer">
                <div class="tach-face">
                    {(0..=9u32)
                        .map(|n| {
                            let rotation = -90.0 + n as f32 * 18.0;
                            let class = if n >= 7 { "tach-label redline" } else { "tach-label" };
                            view! {
                                <div
                                    class=class
                                    style=format!("transform: rotate({rotation}deg) translateY(-72px);")
                                >
                                    {n}
                                </div>
                            }
                        })
                        .collect_view()}
                    <div
                        class="tach-needle"
                        style=move || format!("transform: rotate({}deg);", needle_rotation())
                    ></div>
                </div>
                <div class="tach-rpm">{move || format!("{:.0} RPM", rpm.get())}</div>
            </div>

            <div class=move || message_class.get()>{move || message.get()}</div>

            <div class="pedal-row">
                <button
                    class="btn pedal gas"
                    disabled=move || unlocked.get()
                    on:pointerdown=move |_| set_pedal(Pedal::Gas)
                    on:pointerup=move |_| set_pedal(Pedal::Released)
                    on:pointerleave=move |_| set_pedal(Pedal::Released)
                >
                    "Gas"
                </button>
                <button
                    class="btn pedal brake"
                    disabled=move || unlocked.get()
                    on:pointerdown=move |_| set_pedal(Pedal::Brake)
                    on:pointerup=move |_| set_pedal(Pedal::Released)
                    on:pointerleave=move |_| set_pedal(Pedal::Released)
                >
                    "Brake"
                </button>
            </div>
        </div>
    }
}
