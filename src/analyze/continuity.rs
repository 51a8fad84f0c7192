use crate::types::context::Context;
use crate::types::issue::Issue;
use crate::types::scoring::SubScore;
use std::collections::BTreeSet;

const DIRECTORY_BONUS: f64 = 50.0;
const LABEL_BONUS: f64 = 30.0;
const REFERENCE_BONUS: f64 = 20.0;

pub fn continuity_score(issue: &Issue, context: &Context) -> SubScore {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    let text = format!("{} {}", issue.title, issue.body()).to_lowercase();
    if let Some(directory) = context
        .recent_directories
        .iter()
        .find(|directory| text.contains(&directory.to_lowercase()))
    {
        score += DIRECTORY_BONUS;
        reasons.push(format!("mentions {directory}"));
    }

    let recent_labels = context
        .recent_labels
        .iter()
        .map(|label| label.to_lowercase())
        .collect::<BTreeSet<_>>();
    let overlap = issue
        .label_set()
        .intersection(&recent_labels)
        .cloned()
        .collect::<Vec<_>>();
    if !overlap.is_empty() {
        score += LABEL_BONUS;
        reasons.push(format!("related: {}", overlap.join(", ")));
    }

    let body = issue.body();
    if let Some(recent) = context
        .recent_issue_numbers
        .iter()
        .find(|recent| body.contains(&format!("#{recent}")))
    {
        score += REFERENCE_BONUS;
        reasons.push(format!("references #{recent}"));
    }

    if reasons.is_empty() {
        return SubScore::new(0.0, "no continuity");
    }
    SubScore::new(score, reasons.join("; "))
}
