//! Journal assistant: five processing modes over one journal entry.

use serde::Deserialize;

use super::{strip_code_fences, AiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalMode {
    Summarize,
    Insights,
    Actions,
    Rewrite,
    Ask,
}

impl JournalMode {
    pub fn all() -> [JournalMode; 5] {
        [
            JournalMode::Summarize,
            JournalMode::Insights,
            JournalMode::Actions,
            JournalMode::Rewrite,
            JournalMode::Ask,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            JournalMode::Summarize => "summarize",
            JournalMode::Insights => "insights",
            JournalMode::Actions => "actions",
            JournalMode::Rewrite => "rewrite",
            JournalMode::Ask => "ask",
        }
    }

    /// All modes but `Ask` expect a structured JSON object back.
    pub fn expects_json(self) -> bool {
        !matches!(self, JournalMode::Ask)
    }
}

#[derive(Debug, Clone, Default)]
pub struct JournalEntry {
    pub title: String,
    pub content: String,
    /// 0-100 mood rating.
    pub mood: u8,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct JournalRequest {
    pub mode: JournalMode,
    pub entry: JournalEntry,
    /// Required by `Rewrite`.
    pub tone: Option<String>,
    /// Required by `Ask`.
    pub question: Option<String>,
}

impl JournalRequest {
    pub fn new(mode: JournalMode, entry: JournalEntry) -> Self {
        Self {
            mode,
            entry,
            tone: None,
            question: None,
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    fn base_prompt(&self) -> String {
        let e = &self.entry;
        let title = if e.title.trim().is_empty() {
            "Untitled"
        } else {
            e.title.trim()
        };
        let tags = if e.tags.is_empty() {
            "None".to_string()
        } else {
            e.tags.join(", ")
        };
        format!(
            "You are a compassionate and insightful AI journaling assistant.\n\
             Analyze the following journal entry:\n\
             - Title: \"{title}\"\n\
             - Content: \"{content}\"\n\
             - Mood Rating (0-100): {mood}\n\
             - Tags: {tags}\n",
            content = e.content,
            mood = e.mood,
        )
    }

    pub fn prompt(&self) -> Result<String, AiError> {
        if self.entry.content.trim().is_empty() {
            return Err(AiError::IncompleteRequest("content"));
        }
        let base = self.base_prompt();
        let tail = match self.mode {
            JournalMode::Summarize => "Provide a concise, one-paragraph summary of this entry.\n\
                 Respond with a JSON object: {\"summary\": \"your one-paragraph summary\"}"
                .to_string(),
            JournalMode::Insights => "Identify key emotional themes, potential cognitive patterns (catastrophizing, \
                 black-and-white thinking, and so on), and underlying feelings.\n\
                 Respond with a JSON object: {\"insights\": \"2-4 key insights, framed constructively and gently\"}"
                .to_string(),
            JournalMode::Actions => "Suggest 2-3 small, concrete, actionable steps the user could take based on \
                 this entry, aimed at improving their situation or mindset.\n\
                 Respond with a JSON object: {\"actions\": \"2-3 actionable suggestions\"}"
                .to_string(),
            JournalMode::Rewrite => {
                let tone = self
                    .tone
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .ok_or(AiError::IncompleteRequest("tone"))?;
                format!(
                    "The user wants their entry rewritten in a \"{tone}\" tone. Rewrite the core \
                     message in this new tone, keeping the original meaning.\n\
                     Respond with a JSON object: {{\"rewrite\": \"the rewritten entry text\"}}"
                )
            }
            JournalMode::Ask => {
                let question = self
                    .question
                    .as_deref()
                    .map(str::trim)
                    .filter(|q| !q.is_empty())
                    .ok_or(AiError::IncompleteRequest("question"))?;
                format!(
                    "Answer the user's question based only on the information in the entry \
                     itself. Do not invent information.\n\
                     User's question: \"{question}\"\n\
                     Your answer:"
                )
            }
        };
        Ok(format!("{base}\n{tail}"))
    }
}

/// The typed reply for each mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalReply {
    Summary(String),
    Insights(String),
    Actions(String),
    Rewrite(String),
    Answer(String),
}

impl JournalReply {
    pub fn text(&self) -> &str {
        match self {
            JournalReply::Summary(s)
            | JournalReply::Insights(s)
            | JournalReply::Actions(s)
            | JournalReply::Rewrite(s)
            | JournalReply::Answer(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SummaryBody {
    summary: String,
}

#[derive(Debug, Deserialize)]
struct InsightsBody {
    insights: String,
}

#[derive(Debug, Deserialize)]
struct ActionsBody {
    actions: String,
}

#[derive(Debug, Deserialize)]
struct RewriteBody {
    rewrite: String,
}

/// Parse the raw model text for `mode`. Structured modes require their
/// mode-specific field to be present and non-empty; `Ask` accepts plain text.
pub fn parse_reply(mode: JournalMode, raw: &str) -> Result<JournalReply, AiError> {
    fn required(value: String, field: &'static str) -> Result<String, AiError> {
        if value.trim().is_empty() {
            Err(AiError::MissingField(field))
        } else {
            Ok(value)
        }
    }

    let stripped = strip_code_fences(raw);
    match mode {
        JournalMode::Summarize => {
            let body: SummaryBody = serde_json::from_str(stripped)?;
            Ok(JournalReply::Summary(required(body.summary, "summary")?))
        }
        JournalMode::Insights => {
            let body: InsightsBody = serde_json::from_str(stripped)?;
            Ok(JournalReply::Insights(required(body.insights, "insights")?))
        }
        JournalMode::Actions => {
            let body: ActionsBody = serde_json::from_str(stripped)?;
            Ok(JournalReply::Actions(required(body.actions, "actions")?))
        }
        JournalMode::Rewrite => {
            let body: RewriteBody = serde_json::from_str(stripped)?;
            Ok(JournalReply::Rewrite(required(body.rewrite, "rewrite")?))
        }
        JournalMode::Ask => {
            let answer = raw.trim();
            if answer.is_empty() {
                Err(AiError::Empty)
            } else {
                Ok(JournalReply::Answer(answer.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> JournalEntry {
        JournalEntry {
            title: "Track day".to_string(),
            content: "Missed an apex and spiraled about it all evening.".to_string(),
            mood: 40,
            tags: vec!["driving".to_string()],
        }
    }

    #[test]
    fn every_mode_builds_a_prompt_from_the_entry() {
        let p = JournalRequest::new(JournalMode::Summarize, entry())
            .prompt()
            .unwrap();
        assert!(p.contains("Track day"));
        assert!(p.contains("Mood Rating (0-100): 40"));
        assert!(p.contains("\"summary\""));
    }

    #[test]
    fn rewrite_and_ask_require_their_metadata() {
        assert!(matches!(
            JournalRequest::new(JournalMode::Rewrite, entry()).prompt(),
            Err(AiError::IncompleteRequest("tone"))
        ));
        assert!(matches!(
            JournalRequest::new(JournalMode::Ask, entry()).prompt(),
            Err(AiError::IncompleteRequest("question"))
        ));

        let p = JournalRequest::new(JournalMode::Rewrite, entry())
            .with_tone("hopeful")
            .prompt()
            .unwrap();
        assert!(p.contains("hopeful"));
    }

    #[test]
    fn empty_entries_are_refused() {
        let mut e = entry();
        e.content = "   ".to_string();
        assert!(matches!(
            JournalRequest::new(JournalMode::Insights, e).prompt(),
            Err(AiError::IncompleteRequest("content"))
        ));
    }

    #[test]
    fn structured_modes_parse_their_field() {
        let reply = parse_reply(JournalMode::Summarize, r#"{"summary":"A hard day."}"#).unwrap();
        assert_eq!(reply, JournalReply::Summary("A hard day.".to_string()));

        let reply = parse_reply(JournalMode::Actions, r#"{"actions":"1. Sleep."}"#).unwrap();
        assert_eq!(reply.text(), "1. Sleep.");
    }

    #[test]
    fn the_wrong_shape_fails_the_call() {
        // An insights payload handed to the summarize parser must not pass.
        assert!(matches!(
            parse_reply(JournalMode::Summarize, r#"{"insights":"..."}"#),
            Err(AiError::Malformed(_))
        ));
        assert!(matches!(
            parse_reply(JournalMode::Rewrite, r#"{"rewrite":""}"#),
            Err(AiError::MissingField("rewrite"))
        ));
    }

    #[test]
    fn ask_accepts_plain_text_only_when_non_empty() {
        assert_eq!(
            parse_reply(JournalMode::Ask, " Yes, twice. ").unwrap(),
            JournalReply::Answer("Yes, twice.".to_string())
        );
        assert!(matches!(
            parse_reply(JournalMode::Ask, "   "),
            Err(AiError::Empty)
        ));
    }
}
