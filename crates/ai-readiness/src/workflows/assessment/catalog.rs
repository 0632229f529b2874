use super::domain::{keys, Question, QuestionKind, QuestionOption, ScaleRange};

/// Ordered, immutable question sequence for one quiz run.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn position(&self, question_id: &str) -> Option<usize> {
        self.questions
            .iter()
            .position(|question| question.id == question_id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn options(pairs: &[(&'static str, &'static str)]) -> Vec<QuestionOption> {
    pairs
        .iter()
        .map(|&(value, label)| QuestionOption { value, label })
        .collect()
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: keys::ROLE,
            progress_label: "Identity",
            title: "Which best describes your current role?",
            subtitle: "Select your identity to personalize your AI roadmap.",
            kind: QuestionKind::Single,
            options: options(&[
                ("product", "Product Manager"),
                ("developer", "Developer / Engineer"),
                ("founder", "Startup Founder"),
                ("business", "Business / Ops"),
                ("creative", "Creative / Design"),
                ("marketing", "Marketing"),
                ("other", "Other Professional"),
            ]),
            range: None,
            placeholder: None,
        },
        Question {
            id: keys::EXPERIENCE,
            progress_label: "Experience",
            title: "How many years of working experience do you have?",
            subtitle: "This helps us gauge your professional context.",
            kind: QuestionKind::Single,
            options: options(&[
                ("intern", "Internship / Student"),
                ("0-1", "0–1 year"),
                ("2-4", "2–4 years"),
                ("5-7", "5–7 years"),
                ("8-10", "8–10 years"),
                ("11-15", "11–15 years"),
                ("16-20", "16–20 years"),
                ("20+", "20+ years"),
            ]),
            range: None,
            placeholder: None,
        },
        Question {
            id: keys::AI_USAGE,
            progress_label: "Habits",
            title: "How often do you currently use AI tools?",
            subtitle: "Think ChatGPT, Gemini, Claude, Copilot, etc.",
            kind: QuestionKind::Single,
            options: options(&[
                ("never", "Never or rarely"),
                ("monthly", "Monthly"),
                ("weekly", "Weekly"),
                ("daily", "Daily"),
                ("multiple", "Multiple times daily"),
            ]),
            range: None,
            placeholder: None,
        },
        Question {
            id: keys::AI_PERSPECTIVE,
            progress_label: "Mindset",
            title: "What's your honest take on AI right now?",
            subtitle: "Pick all that apply.",
            kind: QuestionKind::Multiple,
            options: options(&[
                ("excited", "Excited & ready"),
                ("curious", "Curious but cautious"),
                ("overwhelmed", "Overwhelmed"),
                ("skeptical", "Skeptical"),
                ("falling-behind", "Feel behind"),
            ]),
            range: None,
            placeholder: None,
        },
        Question {
            id: keys::MAIN_GOAL,
            progress_label: "Aspirations",
            title: "What is your main goal with AI?",
            subtitle: "Select all outcomes you want.",
            kind: QuestionKind::Multiple,
            options: options(&[
                ("financial", "Gain financial skills"),
                ("projects", "Build personal projects"),
                ("growth", "Professional growth"),
                ("future", "Plan for my future"),
                ("improvement", "Self-Improvement"),
            ]),
            range: None,
            placeholder: None,
        },
        Question {
            id: keys::CHALLENGES,
            progress_label: "Obstacles",
            title: "What are your biggest challenges with AI?",
            subtitle: "Identify what is blocking your path.",
            kind: QuestionKind::Multiple,
            options: options(&[
                ("start", "Don't know where to start"),
                ("technical", "Too technical"),
                ("time", "No time to learn"),
                ("use-cases", "No use-case clarity"),
                ("stuck", "Tried before, didn't stick"),
            ]),
            range: None,
            placeholder: None,
        },
        Question {
            id: keys::AI_SOLUTION,
            progress_label: "Vision",
            title: "If you could build ONE AI solution tomorrow, what would it do?",
            subtitle: "Dream big. What problem would it solve?",
            kind: QuestionKind::Text,
            options: Vec::new(),
            range: None,
            placeholder: Some("E.g. \"An assistant that writes client emails for me...\""),
        },
        Question {
            id: keys::AI_SKILLS,
            progress_label: "Proficiency",
            title: "Rate your current AI skills",
            subtitle: "Your AI journey starts here.",
            kind: QuestionKind::Scale,
            options: Vec::new(),
            range: Some(ScaleRange {
                min: 0,
                max: 10,
                min_label: "Beginner",
                max_label: "Expert",
            }),
            placeholder: None,
        },
        Question {
            id: keys::LEARNING_STYLE,
            progress_label: "Learning",
            title: "How do you learn best?",
            subtitle: "Choose what resonates.",
            kind: QuestionKind::Single,
            options: options(&[
                ("hands-on", "Learn by building"),
                ("structured", "Structured lessons"),
                ("mentorship", "With others / mentorship"),
                ("self-paced", "Self-paced videos"),
            ]),
            range: None,
            placeholder: None,
        },
        Question {
            id: keys::TIME_COMMITMENT,
            progress_label: "Commitment",
            title: "How much time can you commit per week?",
            subtitle: "Your roadmap adapts to your schedule.",
            kind: QuestionKind::Single,
            options: options(&[
                ("2-3", "2–3 hours"),
                ("4-6", "4–6 hours"),
                ("7-10", "7–10 hours"),
                ("10+", "10+ hours"),
            ]),
            range: None,
            placeholder: None,
        },
    ]
}
