pub mod domain;
mod fallback;
mod gemini;
mod generator;
mod prompt;
mod requester;

pub use domain::{
    CareerPath, CurriculumWeek, ExampleProject, GeneratedReport, Report, ReportSource,
};
pub use fallback::fallback_report;
pub use gemini::GeminiClient;
pub use generator::{NarrativeError, NarrativeGenerator, NarrativeRequest};
pub use prompt::{build_request, report_schema, SYSTEM_INSTRUCTION};
pub use requester::{parse_report, ReportRequester};
