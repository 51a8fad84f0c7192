pub mod continuity;
pub mod dependency;
pub mod freshness;
pub mod priority;

use crate::types::context::Context;
use crate::types::issue::Issue;
use crate::types::scoring::{Score, ScoreResult};
use chrono::{DateTime, Utc};

pub const WEIGHT_CONTINUITY: Score = 0.30;
pub const WEIGHT_PRIORITY: Score = 0.30;
pub const WEIGHT_FRESHNESS: Score = 0.20;
pub const WEIGHT_DEPENDENCY: Score = 0.20;

/// Score one issue against recent work and the rest of the collection.
pub fn score_issue(
    issue: &Issue,
    context: &Context,
    all_issues: &[Issue],
    now: DateTime<Utc>,
) -> ScoreResult {
    let continuity = continuity::continuity_score(issue, context);
    let priority = priority::priority_score(issue);
    let freshness = freshness::freshness_score(issue, now);
    let dependency = dependency::dependency_score(issue, all_issues);

    let total = continuity.score * WEIGHT_CONTINUITY
        + priority.score * WEIGHT_PRIORITY
        + freshness.score * WEIGHT_FRESHNESS
        + dependency.score * WEIGHT_DEPENDENCY;

    tracing::debug!(
        issue = issue.number,
        total,
        continuity = continuity.score,
        priority = priority.score,
        freshness = freshness.score,
        dependency = dependency.score,
        "scored issue"
    );

    ScoreResult {
        number: issue.number,
        title: issue.title.clone(),
        total_score: round1(total),
        continuity_score: round1(continuity.score),
        continuity_reason: continuity.rationale,
        priority_score: round1(priority.score),
        priority_reason: priority.rationale,
        freshness_score: round1(freshness.score),
        freshness_reason: freshness.rationale,
        dependency_score: round1(dependency.score),
        dependency_reason: dependency.rationale,
    }
}

/// Score every issue, in input order. Ordering is left to [`crate::report::rank`].
pub fn score_all(issues: &[Issue], context: &Context, now: DateTime<Utc>) -> Vec<ScoreResult> {
    issues
        .iter()
        .map(|issue| score_issue(issue, context, issues, now))
        .collect()
}

fn round1(value: Score) -> Score {
    (value * 10.0).round() / 10.0
}
