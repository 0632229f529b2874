use super::domain::{CareerPath, CurriculumWeek, ExampleProject, Report};

/// Static roadmap served whenever the narrative model cannot be used.
pub fn fallback_report() -> Report {
    Report {
        role_title: "Professional (AI Explorer)".to_string(),
        profile_summary: "You are a professional looking to upgrade your skills and leverage AI for career growth.".to_string(),
        current_state: "Right now, you have solid skills and some exposure to AI tools. Your next step is to bridge the gap between your current expertise and AI-driven automation.".to_string(),
        progress_steps: strings(&[
            "Automate repetitive tasks using AI",
            "Build dashboards & insights that dynamically update",
            "Experiment with AI prototypes for business processes",
            "Leverage AI tools to accelerate your workflow",
        ]),
        frameworks: strings(&[
            "Automate Product Workflows with AI – streamline repetitive analysis tasks",
            "Build AI Assistants for Data Insights – create agents that summarize trends",
            "Design AI-Driven Dashboards & Analytics – integrate AI predictions",
            "Prototype AI Products – build functional mini-projects",
        ]),
        example_projects: vec![
            project(
                "AI Dashboard with KPI Tracking",
                "Build a dynamic dashboard using Streamlit or Excel AI that tracks key metrics.",
            ),
            project(
                "Data Assistant for Insights",
                "Create an AI assistant that suggests actionable insights from raw datasets.",
            ),
            project(
                "Predictive Model",
                "Prototype a model using PandasAI to forecast trends.",
            ),
            project(
                "Automated Workflows",
                "Set up automation pipelines to handle repetitive reporting.",
            ),
        ],
        estimated_time: "With professional guidance, you could build 5+ meaningful projects and see measurable career impact within 8 weeks.".to_string(),
        career_path: CareerPath {
            from: "Current Professional".to_string(),
            to: "AI Power User".to_string(),
            milestones: strings(&[
                "Build 5+ hands-on AI projects relevant to your role",
                "Learn practical agent workflows used in top AI companies",
                "Create a portfolio that shows measurable automation outcomes",
                "Position yourself for AI Data Engineer or Automation roles",
            ]),
        },
        curriculum: vec![
            week(
                "Week 2",
                "Build AI Assistants",
                "Create agents that generate actionable insights.",
            ),
            week(
                "Week 4",
                "Automate Workflows",
                "Streamline repetitive tasks and boost efficiency.",
            ),
            week(
                "Week 5",
                "Prototype AI Products",
                "Turn ideas into functional AI prototypes quickly.",
            ),
            week(
                "Week 6",
                "Deploy Solutions",
                "Test, measure, and optimize AI solutions for maximum impact.",
            ),
        ],
        summary_quote: "With your background, you are perfectly positioned to step into AI-driven automation. The next stage of your journey is hands-on — building AI agents that analyze data, generate reports, and power decision-making.".to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn project(title: &str, description: &str) -> ExampleProject {
    ExampleProject {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn week(week: &str, title: &str, description: &str) -> CurriculumWeek {
    CurriculumWeek {
        week: week.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}
