use serde_json::{json, Value};

use super::super::domain::AnswerStore;
use super::super::scoring::ReadinessLevel;
use super::generator::NarrativeRequest;

pub const SYSTEM_INSTRUCTION: &str = "You are a professional AI Career Strategy expert.";

/// Build the instruction payload for one finished quiz.
pub fn build_request(answers: &AnswerStore, score: u8, level: ReadinessLevel) -> NarrativeRequest {
    NarrativeRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        prompt: render_prompt(answers, score, level),
        response_schema: report_schema(),
    }
}

fn render_prompt(answers: &AnswerStore, score: u8, level: ReadinessLevel) -> String {
    format!(
        r#"Act as an elite AI Career Coach. Generate a detailed "AI Readiness Report" for this user.

User Profile:
{profile}

Calculated Score: {score}/100
Assessed Level: {level}

Your goal is to provide a structured, professional report that guides them from their current role to an AI-enhanced version of that role.

Crucial Requirements:
1. roleTitle: Combine their role and experience (e.g., "Data Analyst (3–4 Years Experience)").
2. profileSummary: A professional summary of who they are and their ambition.
3. currentState: This section is titled "Where You Are & What You Can Do Next". Explain where they are now and what they need to do next to bridge the gap to AI.
4. progressSteps: A list of actionable next steps (e.g., "Start automating repetitive data tasks", "Build dashboards").
5. frameworks: A list of "Frameworks & Tools to Supercharge Your Growth". Include brief descriptions (e.g., "Automate Product Workflows with AI – streamline repetitive analysis tasks").
6. exampleProjects: 4 specific, high-value projects they should build. Title and Description.
7. estimatedTime: e.g., "With professional guidance, you could build 5+ meaningful projects... within 8 weeks".
8. careerPath: Define a path from their current role to a future AI role.
   - from: Current Role
   - to: Target AI Role
   - milestones: 4 checklist items (e.g., "Build 5+ hands-on AI projects", "Learn practical agent workflows").
9. launchPadCurriculum: Create a 6-8 week learning path (Weeks 1, 2, 4, 5, 6) focusing on specific skills like "Automate Workflows", "Build Assistants", "Dashboards", "Prototyping".
10. summaryQuote: A final motivating summary paragraph.

Tone: Professional, encouraging, authoritative, and highly actionable."#,
        profile = answers.to_pretty_json(),
        score = score,
        level = level.label(),
    )
}

fn string_list(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
        "description": description,
    })
}

/// Response schema mirroring [`super::Report`].
pub fn report_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "roleTitle": { "type": "STRING" },
            "profileSummary": { "type": "STRING" },
            "currentState": {
                "type": "STRING",
                "description": "Section: Where You Are & What You Can Do Next"
            },
            "progressSteps": string_list("List of bullet points for 'Here is how you can progress'"),
            "frameworks": string_list("List of Frameworks & Tools to Supercharge Growth"),
            "exampleProjects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["title", "description"]
                }
            },
            "estimatedTime": { "type": "STRING", "description": "e.g., 6-8 weeks" },
            "careerPath": {
                "type": "OBJECT",
                "properties": {
                    "from": { "type": "STRING", "description": "Current Role" },
                    "to": { "type": "STRING", "description": "Target AI Role" },
                    "milestones": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["from", "to", "milestones"]
            },
            "launchPadCurriculum": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "week": { "type": "STRING" },
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["week", "title", "description"]
                }
            },
            "summaryQuote": {
                "type": "STRING",
                "description": "A final motivating summary paragraph."
            }
        },
        "required": [
            "roleTitle",
            "profileSummary",
            "currentState",
            "progressSteps",
            "frameworks",
            "exampleProjects",
            "estimatedTime",
            "careerPath",
            "launchPadCurriculum",
            "summaryQuote"
        ]
    })
}
