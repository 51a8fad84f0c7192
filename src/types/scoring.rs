use serde::Serialize;

pub type Score = f64;

/// One factor's contribution together with the reason it took that value.
#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub score: Score,
    pub rationale: String,
}

impl SubScore {
    pub fn new(score: Score, rationale: impl Into<String>) -> Self {
        Self {
            score: score.clamp(0.0, 100.0),
            rationale: rationale.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub number: u64,
    pub title: String,
    pub total_score: Score,
    pub continuity_score: Score,
    pub continuity_reason: String,
    pub priority_score: Score,
    pub priority_reason: String,
    pub freshness_score: Score,
    pub freshness_reason: String,
    pub dependency_score: Score,
    pub dependency_reason: String,
}
