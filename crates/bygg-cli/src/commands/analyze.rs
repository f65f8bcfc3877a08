use anyhow::bail;
use bygg_core::entities::AiAnalysis;
use bygg_core::enums::AnalysisState;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::Session;
use crate::output;

/// Handle `byggkoll analyze`: one analysis, awaited in the foreground.
pub async fn handle(session: &mut Session, flags: &GlobalFlags) -> anyhow::Result<()> {
    session.start_analysis()?;
    let state = session.wait_analysis().await;

    match (state, session.latest_analysis()) {
        (Some(AnalysisState::Succeeded), Some(analysis)) => print_analysis(analysis, flags.format),
        _ => bail!("analysis unavailable (check the Gemini API key; --verbose shows the cause)"),
    }
}

pub fn print_analysis(analysis: &AiAnalysis, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        println!("{}", render_analysis(analysis));
        return Ok(());
    }
    output::output(analysis, format)
}

/// Reading layout: summary, efficiency, then numbered recommendations.
pub fn render_analysis(analysis: &AiAnalysis) -> String {
    let mut text = format!(
        "Sammanfattning\n  {}\n\nEffektivitet\n  {}\n\nRekommendationer",
        analysis.summary, analysis.efficiency
    );
    if analysis.recommendations.is_empty() {
        text.push_str("\n  -");
    }
    for (index, recommendation) in analysis.recommendations.iter().enumerate() {
        text.push_str(&format!("\n  {}. {recommendation}", index + 1));
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_numbers_recommendations() {
        let analysis = AiAnalysis {
            summary: "Arbetet följer plan.".into(),
            efficiency: "God.".into(),
            recommendations: vec!["Följ upp ÄTA.".into(), "Begränsa övertid.".into()],
        };
        assert_eq!(
            render_analysis(&analysis),
            "Sammanfattning\n  Arbetet följer plan.\n\nEffektivitet\n  God.\n\n\
             Rekommendationer\n  1. Följ upp ÄTA.\n  2. Begränsa övertid."
        );
    }

    #[test]
    fn render_marks_empty_recommendations() {
        let analysis = AiAnalysis {
            summary: "s".into(),
            efficiency: "e".into(),
            recommendations: vec![],
        };
        assert!(render_analysis(&analysis).ends_with("Rekommendationer\n  -"));
    }
}
