pub mod json;
pub mod text;

use crate::error::KeepError;
use crate::types::scoring::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Sort by total score, highest first. Equal totals keep their input order.
pub fn rank(mut results: Vec<ScoreResult>) -> Vec<ScoreResult> {
    results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    results
}

/// `top_n` only bounds the text report; JSON always carries every result.
pub fn render(
    results: &[ScoreResult],
    format: OutputFormat,
    top_n: usize,
) -> Result<String, KeepError> {
    match format {
        OutputFormat::Json => json::to_json(results).map_err(KeepError::Json),
        OutputFormat::Text => Ok(text::format_recommendations(results, top_n)),
    }
}
