use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ai_readiness::workflows::assessment::report::fallback_report;
use ai_readiness::workflows::assessment::{
    keys, Advance, AdvanceRejection, LeadCapture, NarrativeError, NarrativeGenerator,
    NarrativeRequest, QuizFlowError, QuizPhase, QuizSession, ReadinessLevel, ReportRequester,
    ReportSource,
};
use async_trait::async_trait;

struct CountingGenerator {
    reply: Result<String, u16>,
    calls: AtomicUsize,
}

impl CountingGenerator {
    fn replying(reply: Result<String, u16>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl NarrativeGenerator for CountingGenerator {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(request.prompt.contains("Assessed Level:"));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(NarrativeError::Status {
                status: *status,
                body: String::new(),
            }),
        }
    }
}

fn answer_everything(session: &mut QuizSession) {
    session.start().expect("quiz starts");

    session.answer("developer").expect("role");
    session.advance().expect("role accepted");
    session.answer("2-4").expect("experience");
    session.advance().expect("experience accepted");
    session.answer("monthly").expect("usage");
    session.advance().expect("usage accepted");
    session.toggle("skeptical").expect("perspective");
    session.advance().expect("perspective accepted");
    session.toggle("improvement").expect("goal");
    session.advance().expect("goal accepted");
    session.toggle("start").expect("challenge");
    session.advance().expect("challenges accepted");

    session.answer("bot").expect("solution draft");
    assert_eq!(
        session.advance(),
        Err(QuizFlowError::Rejected(AdvanceRejection::TooShort))
    );
    session.answer("chatbots").expect("solution draft");
    assert_eq!(
        session.advance(),
        Err(QuizFlowError::Rejected(AdvanceRejection::SingleWord))
    );
    session
        .answer("A helper that summarizes pull requests")
        .expect("solution");
    session.advance().expect("solution accepted");

    session.answer(0).expect("skills");
    session.advance().expect("zero rating accepted");
    session.answer("structured").expect("learning");
    session.advance().expect("learning accepted");
    session.answer("2-3").expect("time");
    assert_eq!(session.advance(), Ok(Advance::ReadyToScore));
}

#[tokio::test]
async fn quiz_flow_scores_and_serves_generated_report() {
    let mut expected = fallback_report();
    expected.role_title = "Developer (2–4 Years Experience)".to_string();
    let generator = CountingGenerator::replying(Ok(
        serde_json::to_string(&expected).expect("report serializes"),
    ));
    let requester = ReportRequester::new(generator.clone());

    let mut session = QuizSession::standard();
    answer_everything(&mut session);
    assert_eq!(session.phase(), QuizPhase::Calculating);

    let generated = session.complete(&requester).await.expect("quiz completes");
    assert_eq!(generated.source, ReportSource::Generated);
    assert_eq!(generated.report, expected);

    // monthly 15 + skill 0 + skeptical 5 - one challenge 3
    assert_eq!(session.score(), 17);
    assert_eq!(session.level(), ReadinessLevel::Beginner);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);

    assert!(session.visible_report().is_none());
    session
        .unlock(LeadCapture::new("Sam", "sam@example.com", "0123456789"))
        .expect("lead accepted");
    assert_eq!(
        session.visible_report().map(|report| report.report.role_title.as_str()),
        Some("Developer (2–4 Years Experience)")
    );
}

#[tokio::test]
async fn collaborator_failure_falls_back_without_surfacing_errors() {
    let generator = CountingGenerator::replying(Err(500));
    let requester = ReportRequester::new(generator.clone());

    let mut session = QuizSession::standard();
    answer_everything(&mut session);
    let generated = session.complete(&requester).await.expect("quiz completes");

    assert!(generated.is_fallback());
    assert_eq!(generated.report, fallback_report());
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn retake_clears_the_previous_run() {
    let requester = ReportRequester::offline();
    let mut session = QuizSession::standard();
    answer_everything(&mut session);
    session.complete(&requester).await.expect("quiz completes");
    assert!(session.answers().get(keys::AI_USAGE).is_some());

    session.reset();

    assert_eq!(session.phase(), QuizPhase::Intro);
    assert!(session.answers().is_empty());
    assert_eq!(session.score(), 0);
    assert!(session.report().is_none());
    assert!(session.is_locked());

    answer_everything(&mut session);
    session.complete(&requester).await.expect("second run completes");
    assert!(session.is_locked(), "retake re-locks the report");
}
