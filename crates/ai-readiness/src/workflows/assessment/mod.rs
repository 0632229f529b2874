//! AI readiness quiz: question catalog, scoring rubric, narrative report, and quiz flow.

pub mod catalog;
pub mod domain;
pub mod lead;
pub mod report;
pub mod router;
pub mod scoring;
pub mod session;
pub mod validation;

pub use catalog::QuestionCatalog;
pub use domain::{
    keys, AnswerStore, AnswerValue, Question, QuestionKind, QuestionOption, ScaleRange,
};
pub use lead::{LeadCapture, LeadCaptureError};
pub use report::{
    GeneratedReport, NarrativeError, NarrativeGenerator, NarrativeRequest, Report,
    ReportRequester, ReportSource,
};
pub use router::assessment_router;
pub use scoring::{
    compute_score, ReadinessLevel, ScoreBreakdown, ScoreComponent, ScoreFactor, ScoringEngine,
};
pub use session::{Advance, QuizFlowError, QuizPhase, QuizSession};
pub use validation::{validate_answer, AdvanceRejection, FeedbackTone, TextAnswerRules};
