use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::generator::NarrativeError;

/// Personalized roadmap shown at the end of the quiz.
///
/// Field names follow the camelCase response schema requested from the narrative model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub role_title: String,
    pub profile_summary: String,
    pub current_state: String,
    pub progress_steps: Vec<String>,
    pub frameworks: Vec<String>,
    pub example_projects: Vec<ExampleProject>,
    pub estimated_time: String,
    pub career_path: CareerPath,
    #[serde(rename = "launchPadCurriculum")]
    pub curriculum: Vec<CurriculumWeek>,
    pub summary_quote: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleProject {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub from: String,
    pub to: String,
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumWeek {
    pub week: String,
    pub title: String,
    pub description: String,
}

impl Report {
    /// Reject reports with blank text or empty sections.
    pub fn validate(&self) -> Result<(), NarrativeError> {
        require_text("roleTitle", &self.role_title)?;
        require_text("profileSummary", &self.profile_summary)?;
        require_text("currentState", &self.current_state)?;
        require_list("progressSteps", &self.progress_steps)?;
        require_list("frameworks", &self.frameworks)?;
        require_text("estimatedTime", &self.estimated_time)?;
        require_text("summaryQuote", &self.summary_quote)?;

        if self.example_projects.is_empty() {
            return Err(NarrativeError::Invalid {
                field: "exampleProjects",
            });
        }
        for project in &self.example_projects {
            require_text("exampleProjects.title", &project.title)?;
            require_text("exampleProjects.description", &project.description)?;
        }

        require_text("careerPath.from", &self.career_path.from)?;
        require_text("careerPath.to", &self.career_path.to)?;
        require_list("careerPath.milestones", &self.career_path.milestones)?;

        if self.curriculum.is_empty() {
            return Err(NarrativeError::Invalid {
                field: "launchPadCurriculum",
            });
        }
        for week in &self.curriculum {
            require_text("launchPadCurriculum.week", &week.week)?;
            require_text("launchPadCurriculum.title", &week.title)?;
            require_text("launchPadCurriculum.description", &week.description)?;
        }

        Ok(())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), NarrativeError> {
    if value.trim().is_empty() {
        Err(NarrativeError::Invalid { field })
    } else {
        Ok(())
    }
}

fn require_list(field: &'static str, values: &[String]) -> Result<(), NarrativeError> {
    if values.is_empty() {
        return Err(NarrativeError::Invalid { field });
    }
    values
        .iter()
        .try_for_each(|value| require_text(field, value))
}

/// Where a delivered report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    Generated,
    Fallback,
}

impl ReportSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generated => "Generated by Gemini",
            Self::Fallback => "Standard roadmap",
        }
    }
}

/// Report handed to the presentation layer together with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedReport {
    pub report: Report,
    pub source: ReportSource,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedReport {
    pub fn is_fallback(&self) -> bool {
        self.source == ReportSource::Fallback
    }
}
