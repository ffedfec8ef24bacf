//! Exposure-ladder generation: graduated steps toward facing a named fear.

use serde::{Deserialize, Serialize};

use super::{strip_code_fences, AiError};

#[derive(Debug, Clone, Default)]
pub struct LadderRequest {
    pub fear: String,
    pub goal: String,
    pub constraints: String,
}

impl LadderRequest {
    pub fn new(
        fear: impl Into<String>,
        goal: impl Into<String>,
        constraints: impl Into<String>,
    ) -> Self {
        Self {
            fear: fear.into(),
            goal: goal.into(),
            constraints: constraints.into(),
        }
    }

    pub fn prompt(&self) -> Result<String, AiError> {
        if self.fear.trim().is_empty() {
            return Err(AiError::IncompleteRequest("fear"));
        }
        let goal = if self.goal.trim().is_empty() {
            "Not specified"
        } else {
            self.goal.trim()
        };
        let constraints = if self.constraints.trim().is_empty() {
            "None"
        } else {
            self.constraints.trim()
        };
        Ok(format!(
            "You are a therapist designing a graduated exposure ladder for anxiety management.\n\
             \n\
             The fear to address: \"{fear}\"\n\
             The ultimate goal: \"{goal}\"\n\
             Limitations or requirements: \"{constraints}\"\n\
             \n\
             Design 5-8 exposure steps from least to most anxiety-provoking and respond with a\n\
             JSON object of this exact shape:\n\
             {{\n\
               \"ladder\": [\n\
                 {{\n\
                   \"step\": 1,\n\
                   \"title\": \"short step name\",\n\
                   \"prep\": \"how to prepare (breathing, self-talk)\",\n\
                   \"action\": \"exactly what to do\",\n\
                   \"duration_min\": 5,\n\
                   \"suds_start\": 3,\n\
                   \"suds_target\": 2,\n\
                   \"success_criteria\": \"how the user knows the step is done\"\n\
                 }}\n\
               ],\n\
               \"notes\": \"general guidance for working the ladder\",\n\
               \"safety_note\": \"when to involve a professional; empty if not applicable\"\n\
             }}\n\
             \n\
             SUDS values are 0-10 subjective distress ratings.\n\
             Output only the JSON object, with no markdown fencing.",
            fear = self.fear.trim(),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderStep {
    pub step: u32,
    pub title: String,
    #[serde(default)]
    pub prep: String,
    pub action: String,
    #[serde(default)]
    pub duration_min: u32,
    #[serde(default)]
    pub suds_start: u8,
    #[serde(default)]
    pub suds_target: u8,
    #[serde(default)]
    pub success_criteria: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LadderResponse {
    pub ladder: Vec<LadderStep>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub safety_note: String,
}

pub fn parse_ladder(raw: &str) -> Result<LadderResponse, AiError> {
    let parsed: LadderResponse = serde_json::from_str(strip_code_fences(raw))?;
    if parsed.ladder.is_empty() {
        return Err(AiError::MissingField("ladder"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_requires_a_fear() {
        assert!(matches!(
            LadderRequest::new("", "goal", "").prompt(),
            Err(AiError::IncompleteRequest("fear"))
        ));

        let p = LadderRequest::new("Fear of spiders", "", "indoors only")
            .prompt()
            .unwrap();
        assert!(p.contains("Fear of spiders"));
        assert!(p.contains("Not specified"));
        assert!(p.contains("indoors only"));
    }

    #[test]
    fn ladder_with_steps_parses() {
        let raw = r#"{
            "ladder": [
                {"step": 1, "title": "Look at pictures", "action": "Browse images", "duration_min": 5,
                 "suds_start": 3, "suds_target": 2, "success_criteria": "No looking away"}
            ],
            "notes": "Repeat each step until distress falls.",
            "safety_note": ""
        }"#;
        let r = parse_ladder(raw).unwrap();
        assert_eq!(r.ladder.len(), 1);
        assert_eq!(r.ladder[0].title, "Look at pictures");
        assert_eq!(r.ladder[0].suds_target, 2);
    }

    #[test]
    fn empty_ladders_and_wrong_shapes_fail() {
        assert!(matches!(
            parse_ladder(r#"{"ladder": []}"#),
            Err(AiError::MissingField("ladder"))
        ));
        assert!(matches!(
            parse_ladder(r#"{"steps": []}"#),
            Err(AiError::Malformed(_))
        ));
    }
}
