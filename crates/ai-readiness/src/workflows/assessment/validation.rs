use serde::Serialize;

use super::domain::{AnswerValue, Question, QuestionKind};

const DEFAULT_TEXT_MIN_CHARS: usize = 5;
const DEFAULT_SINGLE_WORD_MIN_CHARS: usize = 10;

/// Reasons a question cannot be left yet. Each carries the prompt shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdvanceRejection {
    #[error("Please select an option to continue.")]
    MissingAnswer,
    #[error("Could you add a few more details?")]
    TooShort,
    #[error("Try describing your idea in a full sentence.")]
    SingleWord,
}

/// How loudly a rejection should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTone {
    Error,
    Info,
}

impl AdvanceRejection {
    pub fn retry_prompt(&self) -> String {
        self.to_string()
    }

    pub const fn tone(self) -> FeedbackTone {
        match self {
            Self::MissingAnswer => FeedbackTone::Error,
            Self::TooShort | Self::SingleWord => FeedbackTone::Info,
        }
    }
}

/// Length thresholds for free-text answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAnswerRules {
    pub min_chars: usize,
    pub single_word_min_chars: usize,
}

impl Default for TextAnswerRules {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_TEXT_MIN_CHARS,
            single_word_min_chars: DEFAULT_SINGLE_WORD_MIN_CHARS,
        }
    }
}

/// Check whether the current answer lets the quiz move past `question`.
///
/// A numeric zero is a real answer; blank tokens and empty selections are not.
pub fn validate_answer(
    question: &Question,
    answer: Option<&AnswerValue>,
    rules: &TextAnswerRules,
) -> Result<(), AdvanceRejection> {
    let answer = match answer {
        Some(value) if !value.is_blank() => value,
        _ => return Err(AdvanceRejection::MissingAnswer),
    };

    if question.kind != QuestionKind::Text {
        return Ok(());
    }

    let text = answer
        .as_token()
        .map(str::trim)
        .ok_or(AdvanceRejection::MissingAnswer)?;
    let length = text.chars().count();

    if length < rules.min_chars {
        return Err(AdvanceRejection::TooShort);
    }
    if !text.contains(' ') && length < rules.single_word_min_chars {
        return Err(AdvanceRejection::SingleWord);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::catalog::QuestionCatalog;
    use crate::workflows::assessment::domain::keys;

    fn check(question_id: &str, answer: Option<AnswerValue>) -> Result<(), AdvanceRejection> {
        let catalog = QuestionCatalog::standard();
        let question = catalog.get(question_id).expect("question exists");
        validate_answer(question, answer.as_ref(), &TextAnswerRules::default())
    }

    #[test]
    fn unanswered_and_empty_answers_are_rejected() {
        assert_eq!(check(keys::ROLE, None), Err(AdvanceRejection::MissingAnswer));
        assert_eq!(
            check(keys::ROLE, Some(AnswerValue::from(""))),
            Err(AdvanceRejection::MissingAnswer)
        );
        assert_eq!(
            check(keys::CHALLENGES, Some(AnswerValue::Tokens(Vec::new()))),
            Err(AdvanceRejection::MissingAnswer)
        );
    }

    #[test]
    fn zero_rating_counts_as_an_answer() {
        assert_eq!(check(keys::AI_SKILLS, Some(AnswerValue::from(0))), Ok(()));
    }

    #[test]
    fn short_text_asks_for_more_detail() {
        assert_eq!(
            check(keys::AI_SOLUTION, Some(AnswerValue::from("  bot "))),
            Err(AdvanceRejection::TooShort)
        );
    }

    #[test]
    fn single_short_word_asks_for_a_sentence() {
        assert_eq!(
            check(keys::AI_SOLUTION, Some(AnswerValue::from("chatbot"))),
            Err(AdvanceRejection::SingleWord)
        );
        assert_eq!(
            check(keys::AI_SOLUTION, Some(AnswerValue::from("autoresponder"))),
            Ok(())
        );
        assert_eq!(
            check(keys::AI_SOLUTION, Some(AnswerValue::from("a bot"))),
            Ok(())
        );
    }

    #[test]
    fn rejections_carry_prompt_and_tone() {
        assert_eq!(
            AdvanceRejection::MissingAnswer.retry_prompt(),
            "Please select an option to continue."
        );
        assert_eq!(AdvanceRejection::MissingAnswer.tone(), FeedbackTone::Error);
        assert_eq!(AdvanceRejection::SingleWord.tone(), FeedbackTone::Info);
    }
}
