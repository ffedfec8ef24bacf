//! Reframe Forge: CBT-style analysis of a single negative thought.

use serde::Deserialize;

use super::{strip_code_fences, AiError};

#[derive(Debug, Clone, Default)]
pub struct ReframeRequest {
    pub thought: String,
    pub context: String,
}

impl ReframeRequest {
    pub fn new(thought: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            thought: thought.into(),
            context: context.into(),
        }
    }

    pub fn prompt(&self) -> Result<String, AiError> {
        if self.thought.trim().is_empty() {
            return Err(AiError::IncompleteRequest("thought"));
        }
        let context = if self.context.trim().is_empty() {
            "Not specified"
        } else {
            self.context.trim()
        };
        Ok(format!(
            "You are an expert in Cognitive Behavioral Therapy (CBT). Your task is to help a user reframe a negative thought.\n\
             \n\
             The user's negative thought is: \"{thought}\"\n\
             The context is: \"{context}\"\n\
             \n\
             Analyze the thought and respond with a JSON object of this exact shape:\n\
             {{\n\
               \"distortions\": [\"1-3 identified cognitive distortions, e.g. 'Catastrophizing'\"],\n\
               \"evidence_for\": [\"2-3 points that seem to support the thought, from the user's perspective\"],\n\
               \"evidence_against\": [\"2-3 points that challenge or contradict the thought\"],\n\
               \"balanced_reframe\": \"a more balanced, realistic, compassionate alternative\",\n\
               \"tiny_action\": \"one small concrete step the user can take right now\",\n\
               \"safety_note\": \"advise professional help if the thought suggests severe distress; otherwise a gentle reminder\"\n\
             }}\n\
             \n\
             The balanced_reframe should be constructive and non-judgmental, and the tiny_action simple to accomplish.\n\
             Output only the JSON object, with no markdown fencing.",
            thought = self.thought.trim(),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReframeResponse {
    pub distortions: Vec<String>,
    #[serde(default)]
    pub evidence_for: Vec<String>,
    #[serde(default)]
    pub evidence_against: Vec<String>,
    pub balanced_reframe: String,
    #[serde(default)]
    pub tiny_action: String,
    #[serde(default)]
    pub safety_note: String,
}

/// Parse and validate the model's reply. A reply without at least one
/// distortion and a non-empty reframe is rejected outright.
pub fn parse_reframe(raw: &str) -> Result<ReframeResponse, AiError> {
    let parsed: ReframeResponse = serde_json::from_str(strip_code_fences(raw))?;
    if parsed.distortions.is_empty() {
        return Err(AiError::MissingField("distortions"));
    }
    if parsed.balanced_reframe.trim().is_empty() {
        return Err(AiError::MissingField("balanced_reframe"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_requires_a_thought() {
        assert!(matches!(
            ReframeRequest::new("  ", "ctx").prompt(),
            Err(AiError::IncompleteRequest("thought"))
        ));

        let p = ReframeRequest::new("I always fail", "").prompt().unwrap();
        assert!(p.contains("I always fail"));
        assert!(p.contains("Not specified"));
    }

    #[test]
    fn well_formed_reply_parses() {
        let raw = r#"{
            "distortions": ["Catastrophizing"],
            "evidence_for": ["a deadline slipped"],
            "evidence_against": ["most deadlines were met"],
            "balanced_reframe": "One slip is not a pattern.",
            "tiny_action": "List this week's finished tasks.",
            "safety_note": "Be kind to yourself."
        }"#;
        let r = parse_reframe(raw).unwrap();
        assert_eq!(r.distortions, vec!["Catastrophizing"]);
        assert_eq!(r.balanced_reframe, "One slip is not a pattern.");
    }

    #[test]
    fn fenced_reply_still_parses() {
        let raw = "```json\n{\"distortions\":[\"Mental Filter\"],\"balanced_reframe\":\"ok\"}\n```";
        assert!(parse_reframe(raw).is_ok());
    }

    #[test]
    fn replies_missing_required_fields_are_rejected() {
        assert!(matches!(
            parse_reframe(r#"{"distortions":[],"balanced_reframe":"x"}"#),
            Err(AiError::MissingField("distortions"))
        ));
        assert!(matches!(
            parse_reframe(r#"{"distortions":["a"],"balanced_reframe":"  "}"#),
            Err(AiError::MissingField("balanced_reframe"))
        ));
        assert!(matches!(
            parse_reframe(r#"{"distortions":["a"]}"#),
            Err(AiError::Malformed(_))
        ));
    }
}
