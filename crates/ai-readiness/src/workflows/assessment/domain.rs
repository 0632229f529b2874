use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Question identifiers the scoring rubric reads.
pub mod keys {
    pub const ROLE: &str = "role";
    pub const EXPERIENCE: &str = "experience";
    pub const AI_USAGE: &str = "ai-usage";
    pub const AI_PERSPECTIVE: &str = "ai-perspective";
    pub const MAIN_GOAL: &str = "main-goal";
    pub const CHALLENGES: &str = "challenges";
    pub const AI_SOLUTION: &str = "ai-solution";
    pub const AI_SKILLS: &str = "ai-skills";
    pub const LEARNING_STYLE: &str = "learning-style";
    pub const TIME_COMMITMENT: &str = "time-commitment";
}

/// Input style for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Single,
    Multiple,
    Scale,
    Text,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single choice",
            Self::Multiple => "Multiple choice",
            Self::Scale => "Numeric scale",
            Self::Text => "Free text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Inclusive numeric range for scale questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleRange {
    pub min: i32,
    pub max: i32,
    pub min_label: &'static str,
    pub max_label: &'static str,
}

/// Static quiz question. Built once by the catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub progress_label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<ScaleRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// A single submitted answer.
///
/// Untagged on the wire: a string, an array of strings, or a number. Any other JSON
/// (null, booleans, mixed arrays) is kept as `Other` and scores as unanswered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Token(String),
    Tokens(Vec<String>),
    Other(serde_json::Value),
}

impl AnswerValue {
    pub fn as_token(&self) -> Option<&str> {
        match self {
            AnswerValue::Token(token) => Some(token.as_str()),
            _ => None,
        }
    }

    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Tokens(tokens) => Some(tokens.as_slice()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    /// True when the answer carries nothing a user could have chosen.
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Number(value) => !value.is_finite(),
            AnswerValue::Token(token) => token.trim().is_empty(),
            AnswerValue::Tokens(tokens) => tokens.is_empty(),
            AnswerValue::Other(_) => true,
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.as_tokens()
            .map(|tokens| tokens.iter().any(|candidate| candidate == token))
            .unwrap_or(false)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Token(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Token(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        AnswerValue::Tokens(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        AnswerValue::Tokens(values)
    }
}

/// Per-session record of submitted answers, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`AnswerStore::record`].
    pub fn with(mut self, question_id: &str, value: impl Into<AnswerValue>) -> Self {
        self.record(question_id, value);
        self
    }

    /// Store an answer, replacing any previous answer for the question.
    pub fn record(
        &mut self,
        question_id: &str,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.answers.insert(question_id.to_string(), value.into())
    }

    /// Flip a token in a multiple-choice answer, keeping selection order.
    pub fn toggle(&mut self, question_id: &str, token: &str) {
        match self.answers.get_mut(question_id) {
            Some(AnswerValue::Tokens(tokens)) => {
                if let Some(position) = tokens.iter().position(|existing| existing == token) {
                    tokens.remove(position);
                } else {
                    tokens.push(token.to_string());
                }
            }
            _ => {
                self.answers.insert(
                    question_id.to_string(),
                    AnswerValue::Tokens(vec![token.to_string()]),
                );
            }
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers
            .iter()
            .map(|(question_id, value)| (question_id.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_deserialize_from_untagged_json() {
        let store: AnswerStore = serde_json::from_str(
            r#"{"ai-usage":"daily","ai-skills":7,"challenges":["time","stuck"]}"#,
        )
        .expect("answers parse");

        assert_eq!(store.get(keys::AI_USAGE).and_then(AnswerValue::as_token), Some("daily"));
        assert_eq!(store.get(keys::AI_SKILLS).and_then(AnswerValue::as_number), Some(7.0));
        assert_eq!(
            store
                .get(keys::CHALLENGES)
                .and_then(AnswerValue::as_tokens)
                .map(|tokens| tokens.len()),
            Some(2)
        );
    }

    #[test]
    fn unexpected_json_is_kept_as_blank_answer() {
        let store: AnswerStore = serde_json::from_str(
            r#"{"ai-usage":"daily","ai-skills":null,"main-goal":true,"challenges":["time",3]}"#,
        )
        .expect("answers parse");

        let skills = store.get(keys::AI_SKILLS).expect("skills kept");
        assert_eq!(skills, &AnswerValue::Other(serde_json::Value::Null));
        assert!(skills.is_blank());
        assert_eq!(skills.as_number(), None);
        assert!(store.get(keys::MAIN_GOAL).is_some_and(AnswerValue::is_blank));

        let challenges = store.get(keys::CHALLENGES).expect("challenges kept");
        assert_eq!(challenges.as_tokens(), None);
        assert!(!challenges.contains("time"));
    }

    #[test]
    fn toggle_adds_and_removes_tokens_in_selection_order() {
        let mut store = AnswerStore::new();
        store.toggle(keys::AI_PERSPECTIVE, "curious");
        store.toggle(keys::AI_PERSPECTIVE, "excited");
        store.toggle(keys::AI_PERSPECTIVE, "skeptical");
        store.toggle(keys::AI_PERSPECTIVE, "excited");

        assert_eq!(
            store.get(keys::AI_PERSPECTIVE),
            Some(&AnswerValue::from(vec!["curious", "skeptical"]))
        );
    }

    #[test]
    fn toggle_replaces_scalar_answer_with_list() {
        let mut store = AnswerStore::new().with(keys::MAIN_GOAL, "growth");
        store.toggle(keys::MAIN_GOAL, "projects");
        assert_eq!(
            store.get(keys::MAIN_GOAL),
            Some(&AnswerValue::from(vec!["projects"]))
        );
    }

    #[test]
    fn record_keeps_one_answer_per_question() {
        let mut store = AnswerStore::new();
        assert!(store.record(keys::ROLE, "product").is_none());
        let previous = store.record(keys::ROLE, "developer");
        assert_eq!(previous, Some(AnswerValue::from("product")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn blank_answers_are_detected() {
        assert!(AnswerValue::from("   ").is_blank());
        assert!(AnswerValue::Tokens(Vec::new()).is_blank());
        assert!(AnswerValue::Number(f64::NAN).is_blank());
        assert!(!AnswerValue::from(0).is_blank());
    }
}
