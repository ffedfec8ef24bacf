use keep::content::mood_label;
use leptos::prelude::*;

const MOOD_BANDS: &[&str] = &["Terrible", "Bad", "Neutral", "Good", "Great"];

#[component]
pub(super) fn MoodPanel() -> impl IntoView {
    let (mood, set_mood) = signal(50u8);

    let needle_rotation = move || -90.0 + (mood.get() as f32 / 100.0) * 180.0;

    view! {
        <div class="panel mood-panel">
            <h3 class="panel-title">"Mood Gauge"</h3>

            <div class="gauge">
                <div
                    class="gauge-needle"
                    style=move || format!("transform: rotate({}deg);", needle_rotation())
                ></div>
            </div>

            <input
                type="range"
                min="0"
                max="100"
                prop:value=move || mood.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<u8>() {
                        set_mood.set(v.min(100));
                    }
                }
            />

            <div class="gauge-labels">
                {MOOD_BANDS
                    .iter()
                    .map(|&band| {
                        view! {
                            <span class=move || {
                                if mood_label(mood.get()) == band {
                                    "gauge-label active"
                                } else {
                                    "gauge-label"
                                }
                            }>{band}</span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="mood-readout">{move || mood_label(mood.get())}</div>
        </div>
    }
}
