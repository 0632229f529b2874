mod level;
mod rules;

pub use level::ReadinessLevel;

use super::domain::{keys, AnswerStore};
use serde::{Deserialize, Serialize};

/// Compute the readiness score for a finished answer set.
///
/// Total over every input: missing or malformed answers contribute their lowest value.
pub fn compute_score(answers: &AnswerStore) -> u8 {
    rules::score_answers(answers).1
}

/// Stateless evaluator applying the readiness rubric to an answer set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, answers: &AnswerStore) -> ScoreBreakdown {
        let (components, score) = rules::score_answers(answers);

        ScoreBreakdown {
            score,
            level: ReadinessLevel::for_score(score),
            components,
        }
    }
}

/// Rubric factor contributing to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Usage,
    Skill,
    Perspective,
    ChallengePenalty,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Usage => "Usage frequency",
            Self::Skill => "Self-rated skill",
            Self::Perspective => "Perspective",
            Self::ChallengePenalty => "Challenge penalty",
        }
    }

    pub const fn question_id(self) -> &'static str {
        match self {
            Self::Usage => keys::AI_USAGE,
            Self::Skill => keys::AI_SKILLS,
            Self::Perspective => keys::AI_PERSPECTIVE,
            Self::ChallengePenalty => keys::CHALLENGES,
        }
    }
}

/// Discrete contribution to the score, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub notes: String,
}

/// Score, band, and the components that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: u8,
    pub level: ReadinessLevel,
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    pub fn component(&self, factor: ScoreFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engaged_answers() -> AnswerStore {
        AnswerStore::new()
            .with(keys::AI_USAGE, "daily")
            .with(keys::AI_SKILLS, 5)
            .with(keys::AI_PERSPECTIVE, vec!["excited", "curious"])
            .with(keys::CHALLENGES, vec!["start", "technical"])
    }

    #[test]
    fn engaged_profile_scores_as_power_user() {
        let breakdown = ScoringEngine::new().evaluate(&engaged_answers());

        assert_eq!(breakdown.score, 84);
        assert_eq!(breakdown.level, ReadinessLevel::PowerUser);
        assert_eq!(
            breakdown
                .component(ScoreFactor::ChallengePenalty)
                .map(|component| component.points),
            Some(-6.0)
        );
    }

    #[test]
    fn empty_answers_score_the_perspective_base() {
        let answers = AnswerStore::new();
        assert_eq!(compute_score(&answers), 10);
        assert_eq!(
            ScoringEngine::new().evaluate(&answers).level,
            ReadinessLevel::Beginner
        );
    }

    #[test]
    fn score_is_clamped_at_both_ends() {
        let maxed = AnswerStore::new()
            .with(keys::AI_USAGE, "multiple")
            .with(keys::AI_SKILLS, 10)
            .with(keys::AI_PERSPECTIVE, vec!["excited", "curious", "falling-behind"]);
        assert_eq!(compute_score(&maxed), 100);

        let floored = AnswerStore::new()
            .with(keys::AI_PERSPECTIVE, vec!["overwhelmed", "skeptical"])
            .with(
                keys::CHALLENGES,
                vec!["start", "technical", "time", "use-cases", "stuck"],
            );
        assert_eq!(compute_score(&floored), 0);
    }

    #[test]
    fn malformed_answers_fall_back_to_lowest_contribution() {
        let answers = AnswerStore::new()
            .with(keys::AI_USAGE, vec!["daily"])
            .with(keys::AI_SKILLS, "ten")
            .with(keys::AI_PERSPECTIVE, "excited")
            .with(keys::CHALLENGES, 4);
        assert_eq!(compute_score(&answers), 10);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let engine = ScoringEngine::new();
        let answers = engaged_answers();
        assert_eq!(engine.evaluate(&answers), engine.evaluate(&answers.clone()));
    }

    #[test]
    fn breakdown_links_factors_to_questions() {
        let breakdown = ScoringEngine::new().evaluate(&engaged_answers());
        for component in &breakdown.components {
            assert!(!component.notes.is_empty());
            assert!(!component.factor.question_id().is_empty());
        }
        assert_eq!(breakdown.components.len(), 4);
    }
}
