use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use super::catalog::QuestionCatalog;
use super::domain::{AnswerStore, AnswerValue, Question};
use super::lead::{LeadCapture, LeadCaptureError};
use super::report::{GeneratedReport, ReportRequester};
use super::scoring::{ReadinessLevel, ScoreBreakdown, ScoringEngine};
use super::validation::{validate_answer, AdvanceRejection, TextAnswerRules};

/// Screen the quiz is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    #[default]
    Intro,
    InProgress,
    Calculating,
    Complete,
}

impl QuizPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::InProgress => "in_progress",
            Self::Calculating => "calculating",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where [`QuizSession::advance`] moved the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    ReadyToScore,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizFlowError {
    #[error("quiz is {phase}, expected {expected}")]
    WrongPhase {
        phase: QuizPhase,
        expected: QuizPhase,
    },
    #[error(transparent)]
    Rejected(#[from] AdvanceRejection),
    #[error(transparent)]
    Lead(#[from] LeadCaptureError),
}

/// One user's pass through the quiz, from intro screen to unlocked report.
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: QuestionCatalog,
    rules: TextAnswerRules,
    engine: ScoringEngine,
    phase: QuizPhase,
    cursor: usize,
    answers: AnswerStore,
    score: u8,
    level: ReadinessLevel,
    breakdown: Option<ScoreBreakdown>,
    report: Option<GeneratedReport>,
    locked: bool,
    lead: Option<LeadCapture>,
}

impl QuizSession {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            catalog,
            rules: TextAnswerRules::default(),
            engine: ScoringEngine::new(),
            phase: QuizPhase::Intro,
            cursor: 0,
            answers: AnswerStore::new(),
            score: 0,
            level: ReadinessLevel::default(),
            breakdown: None,
            report: None,
            locked: true,
            lead: None,
        }
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    pub fn with_text_rules(mut self, rules: TextAnswerRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn level(&self) -> ReadinessLevel {
        self.level
    }

    pub fn breakdown(&self) -> Option<&ScoreBreakdown> {
        self.breakdown.as_ref()
    }

    /// The generated report regardless of the lead lock.
    pub fn report(&self) -> Option<&GeneratedReport> {
        self.report.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn lead(&self) -> Option<&LeadCapture> {
        self.lead.as_ref()
    }

    pub fn start(&mut self) -> Result<(), QuizFlowError> {
        self.expect_phase(QuizPhase::Intro)?;
        self.cursor = 0;
        self.phase = if self.catalog.is_empty() {
            QuizPhase::Calculating
        } else {
            QuizPhase::InProgress
        };
        Ok(())
    }

    /// Question on screen; `None` outside the question phase.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::InProgress => self.catalog.at(self.cursor),
            _ => None,
        }
    }

    /// Replace the answer to the current question.
    pub fn answer(&mut self, value: impl Into<AnswerValue>) -> Result<(), QuizFlowError> {
        let question_id = self.current_question_id()?;
        self.answers.record(question_id, value);
        Ok(())
    }

    /// Flip one option of the current multiple-choice question.
    pub fn toggle(&mut self, token: &str) -> Result<(), QuizFlowError> {
        let question_id = self.current_question_id()?;
        self.answers.toggle(question_id, token);
        Ok(())
    }

    /// Validate the current answer and move on, leaving state untouched on rejection.
    pub fn advance(&mut self) -> Result<Advance, QuizFlowError> {
        self.expect_phase(QuizPhase::InProgress)?;
        let Some(question) = self.catalog.at(self.cursor) else {
            self.phase = QuizPhase::Calculating;
            return Ok(Advance::ReadyToScore);
        };

        if let Err(rejection) =
            validate_answer(question, self.answers.get(question.id), &self.rules)
        {
            debug!(question = question.id, reason = %rejection, "answer rejected");
            return Err(rejection.into());
        }

        if self.cursor + 1 < self.catalog.len() {
            self.cursor += 1;
            Ok(Advance::Next { index: self.cursor })
        } else {
            self.phase = QuizPhase::Calculating;
            Ok(Advance::ReadyToScore)
        }
    }

    /// Step back one question, keeping every recorded answer.
    pub fn back(&mut self) -> Result<usize, QuizFlowError> {
        self.expect_phase(QuizPhase::InProgress)?;
        self.cursor = self.cursor.saturating_sub(1);
        Ok(self.cursor)
    }

    /// Score the answers, await the report, and lock it behind lead capture.
    pub async fn complete(
        &mut self,
        requester: &ReportRequester,
    ) -> Result<&GeneratedReport, QuizFlowError> {
        self.expect_phase(QuizPhase::Calculating)?;

        let breakdown = self.engine.evaluate(&self.answers);
        self.score = breakdown.score;
        self.level = breakdown.level;
        self.breakdown = Some(breakdown);

        let report = requester
            .generate(&self.answers, self.score, self.level)
            .await;
        info!(
            score = self.score,
            level = %self.level,
            source = report.source.label(),
            "quiz completed"
        );

        self.locked = true;
        self.phase = QuizPhase::Complete;
        Ok(self.report.insert(report))
    }

    /// Reveal the report once a valid lead is captured.
    pub fn unlock(&mut self, lead: LeadCapture) -> Result<&GeneratedReport, QuizFlowError> {
        self.expect_phase(QuizPhase::Complete)?;
        lead.validate()?;

        self.lead = Some(lead);
        self.locked = false;
        self.report.as_ref().ok_or(QuizFlowError::WrongPhase {
            phase: self.phase,
            expected: QuizPhase::Complete,
        })
    }

    /// The report as the user may see it: only when complete and unlocked.
    pub fn visible_report(&self) -> Option<&GeneratedReport> {
        if self.phase == QuizPhase::Complete && !self.locked {
            self.report.as_ref()
        } else {
            None
        }
    }

    /// One-based position of the question on screen, and the catalog length.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.catalog.len();
        let position = match self.phase {
            QuizPhase::Intro => 0,
            QuizPhase::InProgress => self.cursor + 1,
            QuizPhase::Calculating | QuizPhase::Complete => total,
        };
        (position, total)
    }

    /// Retake: back to the intro screen with nothing answered.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.cursor = 0;
        self.score = 0;
        self.level = ReadinessLevel::default();
        self.breakdown = None;
        self.report = None;
        self.locked = true;
        self.lead = None;
        self.phase = QuizPhase::Intro;
    }

    fn current_question_id(&self) -> Result<&'static str, QuizFlowError> {
        self.expect_phase(QuizPhase::InProgress)?;
        self.catalog
            .at(self.cursor)
            .map(|question| question.id)
            .ok_or(QuizFlowError::WrongPhase {
                phase: QuizPhase::Calculating,
                expected: QuizPhase::InProgress,
            })
    }

    fn expect_phase(&self, expected: QuizPhase) -> Result<(), QuizFlowError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(QuizFlowError::WrongPhase {
                phase: self.phase,
                expected,
            })
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::standard()
    }
}
