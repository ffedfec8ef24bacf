//! Client-side half of the generative-AI integration.
//!
//! Each feature gets a typed request builder (struct -> prompt string) and a
//! schema-checked parser (raw model text -> typed response). Transport is the
//! web layer's job; a failed parse or transport error fails the whole call and
//! the caller shows nothing rather than a guessed partial result.

use serde::Deserialize;
use thiserror::Error;

pub mod journal;
pub mod ladder;
pub mod reframe;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("transport: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("response missing `{0}`")]
    MissingField(&'static str),
    #[error("request missing `{0}`")]
    IncompleteRequest(&'static str),
    #[error("empty response")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Pull the generated text out of the generation-API response envelope
/// (`candidates[0].content.parts[*].text`).
pub fn extract_generated_text(raw: &str) -> Result<String, AiError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    let text: String = envelope
        .candidates
        .first()
        .map(|c| {
            c.content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(AiError::Empty);
    }
    Ok(text)
}

/// Models occasionally wrap JSON in a markdown fence even when told not to.
pub(crate) fn strip_code_fences(raw: &str) -> &str {
    let t = raw.trim();
    let t = t
        .strip_prefix("```json")
        .or_else(|| t.strip_prefix("```"))
        .unwrap_or(t);
    let t = t.strip_suffix("```").unwrap_or(t);
    t.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_the_envelope() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"hello "},{"text":"world"}]}}]}"#;
        assert_eq!(extract_generated_text(raw).unwrap(), "hello world");
    }

    #[test]
    fn empty_or_missing_candidates_fail() {
        assert!(matches!(
            extract_generated_text(r#"{"candidates":[]}"#),
            Err(AiError::Empty)
        ));
        assert!(matches!(extract_generated_text("{}"), Err(AiError::Empty)));
        assert!(matches!(
            extract_generated_text("not json"),
            Err(AiError::Malformed(_))
        ));
    }

    #[test]
    fn fences_are_stripped_before_parsing() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
    }
}
