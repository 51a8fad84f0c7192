use crate::scan::blockers::parse_blockers;
use crate::types::issue::Issue;
use crate::types::scoring::SubScore;
use serde::Serialize;
use std::collections::HashMap;

const OPEN_BLOCKER_PENALTY: f64 = 25.0;
const RESOLVED_SCORE: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockerStatus {
    Open,
    Resolved,
    /// Not present in the supplied collection; scored as open.
    Unknown,
}

impl BlockerStatus {
    pub fn is_blocking(self) -> bool {
        !matches!(self, Self::Resolved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blocker {
    pub number: String,
    pub status: BlockerStatus,
}

/// Parse `issue`'s blockers and classify each against `all_issues`.
pub fn resolve_blockers(issue: &Issue, all_issues: &[Issue]) -> Vec<Blocker> {
    let by_number = all_issues
        .iter()
        .map(|candidate| (candidate.number.to_string(), candidate))
        .collect::<HashMap<_, _>>();

    parse_blockers(issue.body())
        .into_iter()
        .map(|number| {
            let status = match by_number.get(&number) {
                Some(blocker) if blocker.state.is_open() => BlockerStatus::Open,
                Some(_) => BlockerStatus::Resolved,
                None => BlockerStatus::Unknown,
            };
            Blocker { number, status }
        })
        .collect()
}

pub fn dependency_score(issue: &Issue, all_issues: &[Issue]) -> SubScore {
    let blockers = resolve_blockers(issue, all_issues);
    if blockers.is_empty() {
        return SubScore::new(100.0, "no dependencies");
    }

    let (open, resolved): (Vec<_>, Vec<_>) = blockers
        .iter()
        .partition(|blocker| blocker.status.is_blocking());

    if open.is_empty() {
        return SubScore::new(
            RESOLVED_SCORE,
            format!("dependencies resolved: {}", hash_list(&resolved)),
        );
    }

    let score = (100.0 - OPEN_BLOCKER_PENALTY * open.len() as f64).max(0.0);
    let mut reason = format!("blocked by {}", hash_list(&open));
    if !resolved.is_empty() {
        reason.push_str(&format!(" ({} done)", hash_list(&resolved)));
    }
    SubScore::new(score, reason)
}

fn hash_list(blockers: &[&Blocker]) -> String {
    blockers
        .iter()
        .map(|blocker| format!("#{}", blocker.number))
        .collect::<Vec<_>>()
        .join(", ")
}
