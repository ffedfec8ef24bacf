use keep::ai::journal::{
    parse_reply, JournalEntry, JournalMode, JournalReply, JournalRequest,
};
use keep::content::mood_label;
use keep::wizard::AiGate;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::gemini;
use super::storage::PersistedSettings;
use super::Toasts;

const REWRITE_TONES: &[&str] = &["hopeful", "calm", "confident", "grateful", "humorous"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct AiResults {
    summary: Option<String>,
    insights: Option<String>,
    actions: Option<String>,
    rewrite: Option<String>,
    answer: Option<String>,
}

impl AiResults {
    fn slot(&self, mode: JournalMode) -> Option<&String> {
        match mode {
            JournalMode::Summarize => self.summary.as_ref(),
            JournalMode::Insights => self.insights.as_ref(),
            JournalMode::Actions => self.actions.as_ref(),
            JournalMode::Rewrite => self.rewrite.as_ref(),
            JournalMode::Ask => self.answer.as_ref(),
        }
    }

    fn store(&mut self, reply: JournalReply) {
        match reply {
            JournalReply::Summary(s) => self.summary = Some(s),
            JournalReply::Insights(s) => self.insights = Some(s),
            JournalReply::Actions(s) => self.actions = Some(s),
            JournalReply::Rewrite(s) => self.rewrite = Some(s),
            JournalReply::Answer(s) => self.answer = Some(s),
        }
    }
}

fn mode_title(mode: JournalMode) -> &'static str {
    match mode {
        JournalMode::Summarize => "Summarize",
        JournalMode::Insights => "Insights",
        JournalMode::Actions => "Actions",
        JournalMode::Rewrite => "Rewrite",
        JournalMode::Ask => "Ask",
    }
}

/// Journal page: one entry (title, text, mood, tags) plus the AI panel with
/// its five processing modes. A single request may be in flight across the
/// whole panel; failure leaves every result slot as it was.
#[component]
pub(super) fn JournalPage(
    settings: RwSignal<PersistedSettings>,
    toasts: Toasts,
) -> impl IntoView {
    let gate = RwSignal::new(AiGate::new());

    let (title, set_title) = signal(String::new());
    let (text, set_text) = signal(String::new());
    let (mood, set_mood) = signal(50u8);
    let tags = RwSignal::new(Vec::<String>::new());
    let (new_tag, set_new_tag) = signal(String::new());

    let (active_mode, set_active_mode) = signal(JournalMode::Insights);
    let (question, set_question) = signal(String::new());
    let (tone, set_tone) = signal(REWRITE_TONES[0].to_string());
    let results = RwSignal::new(AiResults::default());

    let loading = move || gate.with(|g| g.is_in_flight());
    let word_count = move || text.get().split_whitespace().count();

    let add_tag = move || {
        let tag = new_tag.get_untracked().trim().to_string();
        if tag.is_empty() {
            return;
        }
        tags.update(|ts| {
            if !ts.contains(&tag) {
                ts.push(tag);
            }
        });
        set_new_tag.set(String::new());
    };

    let request = move |mode: JournalMode| {
        if text.get_untracked().trim().is_empty() {
            return;
        }
        if !gate.try_update(AiGate::begin).unwrap_or(false) {
            return;
        }

        let entry = JournalEntry {
            title: title.get_untracked(),
            content: text.get_untracked(),
            mood: mood.get_untracked(),
            tags: tags.get_untracked(),
        };
        let mut req = JournalRequest::new(mode, entry);
        req = match mode {
            JournalMode::Rewrite => req.with_tone(tone.get_untracked()),
            JournalMode::Ask => req.with_question(question.get_untracked()),
            _ => req,
        };

        let prompt = match req.prompt() {
            Ok(p) => p,
            Err(e) => {
                gate.update(AiGate::settle);
                gemini::report_ai_failure(toasts, "Journal AI", &e);
                return;
            }
        };
        let cfg = settings.get_untracked();

        spawn_local(async move {
            let outcome = match gemini::generate(&cfg, &prompt, mode.expects_json()).await {
                Ok(raw) => parse_reply(mode, &raw),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(reply) => results.update(|r| r.store(reply)),
                Err(e) => gemini::report_ai_failure(toasts, "Journal AI", &e),
            }
            gate.update(AiGate::settle);
        });
    };

    view! {
        <section class="page journal-page">
            <div class="page-header">
                <h2>"Journal"</h2>
            </div>

            <div class="journal-grid">
                <div class="panel journal-entry">
                    <input
                        class="journal-title"
                        type="text"
                        placeholder="Entry title..."
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        class="journal-text"
                        placeholder="What's on your mind today?"
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                    ></textarea>
                    <div class="journal-meta">
                        <span class="subtle">{move || format!("{} words", word_count())}</span>
                        <label class="field inline">
                            <span>{move || format!("Mood: {} ({})", mood.get(), mood_label(mood.get()))}</span>
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
                        </label>
                    </div>

                    <div class="tag-row">
                        <For
                            each=move || tags.get()
                            key=|t| t.clone()
                            children=move |tag| {
                                let remove = tag.clone();
                                view! {
                                    <span class="tag">
                                        {tag.clone()}
                                        <button
                                            class="tag-remove"
                                            on:click=move |_| {
                                                let remove = remove.clone();
                                                tags.update(|ts| ts.retain(|t| t != &remove));
                                            }
                                        >
                                            "×"
                                        </button>
                                    </span>
                                }
                            }
                        />
                        <input
                            type="text"
                            placeholder="Add tag..."
                            prop:value=move || new_tag.get()
                            on:input=move |ev| set_new_tag.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    add_tag();
                                }
                            }
                        />
                    </div>
                </div>

                <div class="panel journal-ai" style="position: relative;">
                    <Show when=loading>
                        <div class="loading-overlay">
                            <div class="spinner"></div>
                        </div>
                    </Show>

                    <h3 class="panel-title">"Scribe's Assistant"</h3>

                    <div class="tab-row">
                        {JournalMode::all()
                            .iter()
                            .map(|&mode| {
                                view! {
                                    <button
                                        class=move || {
                                            if active_mode.get() == mode { "tab active" } else { "tab" }
                                        }
                                        on:click=move |_| set_active_mode.set(mode)
                                    >
                                        {mode_title(mode)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    {move || {
                        let mode = active_mode.get();
                        view! {
                            <Show when=move || mode == JournalMode::Rewrite>
                                <label class="field">
                                    <span>"Tone"</span>
                                    <select on:change=move |ev| set_tone.set(event_target_value(&ev))>
                                        {REWRITE_TONES
                                            .iter()
                                            .map(|&t| {
                                                view! {
                                                    <option value=t selected=move || tone.get() == t>
                                                        {t}
                                                    </option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </label>
                            </Show>

                            <Show when=move || mode == JournalMode::Ask>
                                <input
                                    type="text"
                                    placeholder="Ask something about this entry..."
                                    prop:value=move || question.get()
                                    on:input=move |ev| set_question.set(event_target_value(&ev))
                                />
                            </Show>

                            <button
                                class="btn sm accent"
                                disabled=move || {
                                    loading() || text.get().trim().is_empty()
                                        || (mode == JournalMode::Ask
                                            && question.get().trim().is_empty())
                                }
                                on:click=move |_| request(mode)
                            >
                                {format!("✨ {}", mode_title(mode))}
                            </button>

                            <div class="ai-result">
                                {move || {
                                    results
                                        .with(|r| r.slot(mode).cloned())
                                        .map(|text| {
                                            view! {
                                                <div class="ai-result-body">{text}</div>
                                            }
                                        })
                                }}
                            </div>
                        }
                    }}
                </div>
            </div>
        </section>
    }
}
