use std::collections::BTreeSet;

use super::super::domain::{keys, AnswerStore, AnswerValue};
use super::{ScoreComponent, ScoreFactor};

pub(crate) const PERSPECTIVE_BASE: i16 = 10;
pub(crate) const PERSPECTIVE_MAX: i16 = 30;
pub(crate) const SKILL_MAX: f64 = 10.0;
pub(crate) const SKILL_WEIGHT: f64 = 4.0;
pub(crate) const CHALLENGE_WEIGHT: usize = 3;
pub(crate) const CHALLENGE_CAP: usize = 20;

pub(crate) fn usage_points(value: Option<&AnswerValue>) -> u8 {
    match value.and_then(AnswerValue::as_token) {
        Some("never") => 5,
        Some("monthly") => 15,
        Some("weekly") => 30,
        Some("daily") => 45,
        Some("multiple") => 55,
        _ => 0,
    }
}

pub(crate) fn skill_points(value: Option<&AnswerValue>) -> f64 {
    let rating = value.and_then(AnswerValue::as_number).unwrap_or(0.0);
    rating.clamp(0.0, SKILL_MAX) * SKILL_WEIGHT
}

pub(crate) fn perspective_points(value: Option<&AnswerValue>) -> i16 {
    let Some(value) = value else {
        return PERSPECTIVE_BASE;
    };

    let mut points = PERSPECTIVE_BASE;
    if value.contains("excited") {
        points += 10;
    }
    if value.contains("curious") {
        points += 5;
    }
    if value.contains("falling-behind") {
        points += 5;
    }
    if value.contains("overwhelmed") {
        points -= 5;
    }
    if value.contains("skeptical") {
        points -= 5;
    }
    points.clamp(0, PERSPECTIVE_MAX)
}

/// Penalty over distinct selected obstacles; repeated tokens count once.
pub(crate) fn challenge_penalty(value: Option<&AnswerValue>) -> u8 {
    let selected = value
        .and_then(AnswerValue::as_tokens)
        .map(|tokens| tokens.iter().map(String::as_str).collect::<BTreeSet<_>>().len())
        .unwrap_or(0);
    selected.saturating_mul(CHALLENGE_WEIGHT).min(CHALLENGE_CAP) as u8
}

/// Score every rubric factor. The total is clamped to [0, 100] and rounded half away from zero.
pub(crate) fn score_answers(answers: &AnswerStore) -> (Vec<ScoreComponent>, u8) {
    let usage = usage_points(answers.get(keys::AI_USAGE));
    let skill = skill_points(answers.get(keys::AI_SKILLS));
    let perspective = perspective_points(answers.get(keys::AI_PERSPECTIVE));
    let penalty = challenge_penalty(answers.get(keys::CHALLENGES));

    let components = vec![
        ScoreComponent {
            factor: ScoreFactor::Usage,
            points: f64::from(usage),
            notes: match answers.get(keys::AI_USAGE).and_then(AnswerValue::as_token) {
                Some(token) if usage > 0 => format!("uses AI tools '{token}'"),
                Some(token) => format!("unrecognized usage answer '{token}'"),
                None => "usage frequency not answered".to_string(),
            },
        },
        ScoreComponent {
            factor: ScoreFactor::Skill,
            points: skill,
            notes: format!(
                "self-rated {}/10 weighted x{}",
                skill / SKILL_WEIGHT,
                SKILL_WEIGHT
            ),
        },
        ScoreComponent {
            factor: ScoreFactor::Perspective,
            points: f64::from(perspective),
            notes: format!("base {PERSPECTIVE_BASE} adjusted by mindset, capped at {PERSPECTIVE_MAX}"),
        },
        ScoreComponent {
            factor: ScoreFactor::ChallengePenalty,
            points: 0.0 - f64::from(penalty),
            notes: format!("{CHALLENGE_WEIGHT} per obstacle, capped at {CHALLENGE_CAP}"),
        },
    ];

    let raw = f64::from(usage) + skill + f64::from(perspective) - f64::from(penalty);
    let score = raw.clamp(0.0, 100.0).round() as u8;

    (components, score)
}
