use crate::types::issue::Issue;
use crate::types::scoring::SubScore;

/// Label-derived urgency. The first matching tier wins.
pub fn priority_score(issue: &Issue) -> SubScore {
    let labels = issue.label_set();
    let has = |names: &[&str]| names.iter().any(|name| labels.contains(*name));

    if has(&["urgent"]) {
        SubScore::new(100.0, "urgent")
    } else if has(&["high-priority", "high"]) {
        SubScore::new(75.0, "high-priority")
    } else if has(&["low-priority", "low"]) {
        SubScore::new(25.0, "low-priority")
    } else {
        SubScore::new(50.0, "medium (default)")
    }
}
