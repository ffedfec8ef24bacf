use keep::content::CODEX_QUOTES;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CodexEntry {
    id: u64,
    quote: String,
    source: String,
}

/// Codex of quotes: the seeded entries plus whatever the user adds for the
/// session. Nothing is persisted.
#[component]
pub(super) fn CodexPanel() -> impl IntoView {
    let seeded: Vec<CodexEntry> = CODEX_QUOTES
        .iter()
        .enumerate()
        .map(|(i, q)| CodexEntry {
            id: i as u64,
            quote: q.quote.to_string(),
            source: q.source.to_string(),
        })
        .collect();
    let next_id = StoredValue::new(seeded.len() as u64);
    let entries = RwSignal::new(seeded);

    let (show_add, set_show_add) = signal(false);
    let (new_quote, set_new_quote) = signal(String::new());
    let (new_source, set_new_source) = signal(String::new());

    let on_add = move |ev: SubmitEvent| {
        ev.prevent_default();
        let quote = new_quote.get_untracked().trim().to_string();
        if quote.is_empty() {
            return;
        }
        let source = {
            let s = new_source.get_untracked().trim().to_string();
            if s.is_empty() {
                "Personal Affirmation".to_string()
            } else {
                s
            }
        };
        let id = next_id.with_value(|id| *id);
        next_id.set_value(id + 1);
        entries.update(|es| es.push(CodexEntry { id, quote, source }));
        set_new_quote.set(String::new());
        set_new_source.set(String::new());
        set_show_add.set(false);
    };

    view! {
        <div class="panel codex-panel">
            <h3 class="panel-title">"Codex"</h3>

            <For
                each=move || entries.get()
                key=|e| e.id
                children=move |e| {
                    let id = e.id;
                    view! {
                        <blockquote class="codex-entry">
                            <p class="codex-quote">{e.quote}</p>
                            <footer class="codex-source">{e.source}</footer>
                            <button
                                class="icon-btn"
                                title="Remove"
                                on:click=move |_| entries.update(|es| es.retain(|x| x.id != id))
                            >
                                "×"
                            </button>
                        </blockquote>
                    }
                }
            />

            <Show when=move || !show_add.get()>
                <button class="btn sm" on:click=move |_| set_show_add.set(true)>
                    "Add entry"
                </button>
            </Show>

            <Show when=move || show_add.get()>
                <form class="codex-form" on:submit=on_add>
                    <textarea
                        placeholder="A quote or affirmation worth keeping..."
                        prop:value=move || new_quote.get()
                        on:input=move |ev| set_new_quote.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        type="text"
                        placeholder="Source (optional)"
                        prop:value=move || new_source.get()
                        on:input=move |ev| set_new_source.set(event_target_value(&ev))
                    />
                    <div class="btn-row">
                        <button class="btn sm primary" type="submit">
                            "Save"
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
        </div>
    }
}
