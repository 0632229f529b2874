use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::super::domain::AnswerStore;
use super::super::scoring::ReadinessLevel;
use super::domain::{GeneratedReport, Report, ReportSource};
use super::fallback::fallback_report;
use super::gemini::GeminiClient;
use super::generator::{NarrativeError, NarrativeGenerator};
use super::prompt::build_request;
use crate::config::NarrativeConfig;

/// Produces the end-of-quiz report, always succeeding.
///
/// Holds the narrative collaborator when one is configured; without it every call serves the
/// static fallback roadmap.
#[derive(Clone)]
pub struct ReportRequester {
    generator: Option<Arc<dyn NarrativeGenerator>>,
}

impl ReportRequester {
    pub fn new(generator: Arc<dyn NarrativeGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Requester that never leaves the process.
    pub fn offline() -> Self {
        Self { generator: None }
    }

    /// Wire the Gemini client when a credential is configured, otherwise run offline.
    pub fn from_config(config: &NarrativeConfig) -> Self {
        match GeminiClient::from_config(config) {
            Ok(client) => {
                info!(model = %config.model, "narrative generation enabled");
                Self::new(Arc::new(client))
            }
            Err(NarrativeError::MissingCredential) => {
                warn!("Gemini API key is missing; reports will use the standard roadmap");
                Self::offline()
            }
            Err(err) => {
                warn!(error = %err, "narrative client unavailable; reports will use the standard roadmap");
                Self::offline()
            }
        }
    }

    pub fn is_online(&self) -> bool {
        self.generator.is_some()
    }

    /// Generate the report for a finished quiz, substituting the fallback on any failure.
    pub async fn generate(
        &self,
        answers: &AnswerStore,
        score: u8,
        level: ReadinessLevel,
    ) -> GeneratedReport {
        let Some(generator) = &self.generator else {
            return fallback();
        };

        let request = build_request(answers, score, level);
        let outcome = match generator.generate(&request).await {
            Ok(text) => parse_report(&text),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(report) => {
                info!(score, level = %level, "narrative report generated");
                GeneratedReport {
                    report,
                    source: ReportSource::Generated,
                    generated_at: Utc::now(),
                }
            }
            Err(err) => {
                warn!(error = %err, score, level = %level, "narrative generation failed; using fallback roadmap");
                fallback()
            }
        }
    }
}

fn fallback() -> GeneratedReport {
    GeneratedReport {
        report: fallback_report(),
        source: ReportSource::Fallback,
        generated_at: Utc::now(),
    }
}

/// Decode and validate a structured payload returned by the narrative model.
pub fn parse_report(text: &str) -> Result<Report, NarrativeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NarrativeError::EmptyResponse);
    }

    let report: Report = serde_json::from_str(text)?;
    report.validate()?;
    Ok(report)
}
