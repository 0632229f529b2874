use ai_readiness::config::NarrativeConfig;
use ai_readiness::error::AppError;
use ai_readiness::workflows::assessment::{AnswerStore, ReportRequester};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the report requester, skipping the narrative client when `offline` is set.
pub(crate) fn build_requester(config: &NarrativeConfig, offline: bool) -> ReportRequester {
    if offline {
        ReportRequester::offline()
    } else {
        ReportRequester::from_config(config)
    }
}

/// Read an answer set stored as a JSON object keyed by question id.
pub(crate) fn load_answers(path: &Path) -> Result<AnswerStore, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_answers(&raw)
}

pub(crate) fn parse_answers(raw: &str) -> Result<AnswerStore, AppError> {
    let answers = serde_json::from_str(raw)?;
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_readiness::workflows::assessment::{keys, AnswerValue};

    #[test]
    fn parse_answers_reads_mixed_values() {
        let answers = parse_answers(
            r#"{"role":"developer","ai-skills":6,"challenges":["time"]}"#,
        )
        .expect("answers parse");

        assert_eq!(answers.len(), 3);
        assert_eq!(answers.get(keys::AI_SKILLS), Some(&AnswerValue::from(6)));
    }

    #[test]
    fn parse_answers_rejects_non_objects() {
        match parse_answers("[1, 2, 3]") {
            Err(AppError::Answers(_)) => {}
            other => panic!("expected answer parse error, got {other:?}"),
        }
    }

    #[test]
    fn offline_flag_skips_narrative_client() {
        let mut config = NarrativeConfig::offline();
        config.api_key = Some("configured".to_string());

        assert!(!build_requester(&config, true).is_online());
        assert!(build_requester(&config, false).is_online());
    }
}
