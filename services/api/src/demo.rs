use crate::infra::{build_requester, load_answers};
use ai_readiness::config::AppConfig;
use ai_readiness::error::AppError;
use ai_readiness::telemetry;
use ai_readiness::workflows::assessment::{
    keys, Advance, AnswerStore, GeneratedReport, LeadCapture, QuestionCatalog, QuestionKind,
    QuizSession, ReportRequester, ScoreBreakdown, ScoringEngine,
};
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file with answers keyed by question id
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Skip the narrative service and use the standard roadmap
    #[arg(long)]
    pub(crate) offline: bool,
    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the narrative service and use the standard roadmap
    #[arg(long)]
    pub(crate) offline: bool,
}

pub(crate) fn run_questions() {
    let catalog = QuestionCatalog::standard();
    println!("AI readiness quiz ({} questions)", catalog.len());
    for (index, question) in catalog.questions().iter().enumerate() {
        println!(
            "\n{}. [{}] {} ({})",
            index + 1,
            question.progress_label,
            question.title,
            question.kind.label()
        );
        println!("   id: {} | {}", question.id, question.subtitle);
        for option in &question.options {
            println!("   - {} = {}", option.value, option.label);
        }
        if let Some(range) = &question.range {
            println!(
                "   range {}..={} ({} -> {})",
                range.min, range.max, range.min_label, range.max_label
            );
        }
        if let Some(placeholder) = question.placeholder {
            println!("   e.g. {}", placeholder);
        }
    }
}

pub(crate) async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        offline,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let answers = load_answers(&answers)?;
    let requester = build_requester(&config.narrative, offline);

    let breakdown = ScoringEngine::new().evaluate(&answers);
    let generated = requester
        .generate(&answers, breakdown.score, breakdown.level)
        .await;

    if json {
        let payload = json!({
            "breakdown": breakdown,
            "source": generated.source,
            "generated_at": generated.generated_at,
            "report": generated.report,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        render_breakdown(&breakdown);
        render_report(&generated);
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let requester = build_requester(&config.narrative, args.offline);

    println!("AI readiness quiz demo");
    let session = walk_sample_session(&requester).await?;

    if let Some(breakdown) = session.breakdown() {
        render_breakdown(breakdown);
    }
    if let Some(lead) = session.lead() {
        println!("\nReport unlocked for {} <{}>", lead.name, lead.email);
    }
    match session.visible_report() {
        Some(generated) => render_report(generated),
        None => println!("\nReport is still locked"),
    }

    Ok(())
}

/// Answer every question with a sample respondent, then complete and unlock.
pub(crate) async fn walk_sample_session(
    requester: &ReportRequester,
) -> Result<QuizSession, AppError> {
    let answers = sample_answers();
    let mut session = QuizSession::standard();
    session.start()?;

    loop {
        let Some(question) = session.current_question().cloned() else {
            break;
        };
        let (position, total) = session.progress();

        if let Some(value) = answers.get(question.id) {
            match (question.kind, value.as_tokens()) {
                (QuestionKind::Multiple, Some(tokens)) => {
                    for token in tokens {
                        session.toggle(token)?;
                    }
                }
                _ => session.answer(value.clone())?,
            }
        }

        println!("[{position}/{total}] {} -> {}", question.title, describe(&session, question.id));
        if session.advance()? == Advance::ReadyToScore {
            break;
        }
    }

    println!("\nCalculating...");
    session.complete(requester).await?;
    session.unlock(LeadCapture::new(
        "Jordan Rivera",
        "jordan.rivera@example.com",
        "+1 555 010 2030",
    ))?;

    Ok(session)
}

fn describe(session: &QuizSession, question_id: &str) -> String {
    session
        .answers()
        .get(question_id)
        .and_then(|value| serde_json::to_string(value).ok())
        .unwrap_or_else(|| "(unanswered)".to_string())
}

fn sample_answers() -> AnswerStore {
    AnswerStore::new()
        .with(keys::ROLE, "product")
        .with(keys::EXPERIENCE, "5-7")
        .with(keys::AI_USAGE, "weekly")
        .with(keys::AI_PERSPECTIVE, vec!["curious", "falling-behind"])
        .with(keys::MAIN_GOAL, vec!["growth", "projects"])
        .with(keys::CHALLENGES, vec!["time", "use-cases"])
        .with(
            keys::AI_SOLUTION,
            "An assistant that turns customer interviews into prioritized feature briefs",
        )
        .with(keys::AI_SKILLS, 4)
        .with(keys::LEARNING_STYLE, "hands-on")
        .with(keys::TIME_COMMITMENT, "4-6")
}

pub(crate) fn render_breakdown(breakdown: &ScoreBreakdown) {
    println!(
        "\nReadiness score: {}/100 ({})",
        breakdown.score,
        breakdown.level.label()
    );
    println!("Score components");
    for component in &breakdown.components {
        println!(
            "- {}: {:+} ({})",
            component.factor.label(),
            component.points,
            component.notes
        );
    }
}

pub(crate) fn render_report(generated: &GeneratedReport) {
    let report = &generated.report;
    println!(
        "\n{} [{}]",
        report.role_title,
        generated.source.label()
    );
    println!("{}", report.profile_summary);

    println!("\nWhere you are & what you can do next");
    println!("{}", report.current_state);
    for step in &report.progress_steps {
        println!("- {}", step);
    }

    println!("\nFrameworks & tools");
    for framework in &report.frameworks {
        println!("- {}", framework);
    }

    println!("\nExample projects");
    for project in &report.example_projects {
        println!("- {}: {}", project.title, project.description);
    }
    println!("Estimated time: {}", report.estimated_time);

    println!(
        "\nCareer path: {} -> {}",
        report.career_path.from, report.career_path.to
    );
    for milestone in &report.career_path.milestones {
        println!("- [ ] {}", milestone);
    }

    println!("\nLaunch pad curriculum");
    for week in &report.curriculum {
        println!("- {}: {} | {}", week.week, week.title, week.description);
    }

    println!("\n\"{}\"", report.summary_quote);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_readiness::workflows::assessment::{QuizPhase, ReadinessLevel};

    #[tokio::test]
    async fn sample_session_completes_and_unlocks() {
        let session = walk_sample_session(&ReportRequester::offline())
            .await
            .expect("demo session runs");

        assert_eq!(session.phase(), QuizPhase::Complete);
        assert_eq!(session.answers(), &sample_answers());
        // weekly 30 + skill 16 + curious/falling-behind 20 - two challenges 6
        assert_eq!(session.score(), 60);
        assert_eq!(session.level(), ReadinessLevel::Applied);
        let report = session.visible_report().expect("report unlocked");
        assert!(report.is_fallback());
    }
}
