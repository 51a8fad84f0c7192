use crate::types::issue::{Issue, UpdatedAt};
use crate::types::scoring::SubScore;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Recency of the last update relative to `now`.
///
/// Elapsed time is floored to whole days. Timestamps ahead of `now` count as
/// zero days old.
pub fn freshness_score(issue: &Issue, now: DateTime<Utc>) -> SubScore {
    let raw = match &issue.updated_at {
        None => return SubScore::new(50.0, "unknown update time"),
        Some(UpdatedAt::Text(raw)) if raw.is_empty() => {
            return SubScore::new(50.0, "unknown update time");
        }
        Some(UpdatedAt::Text(raw)) => raw.as_str(),
        Some(UpdatedAt::Malformed) => {
            tracing::debug!(issue = issue.number, "non-string updatedAt");
            return SubScore::new(50.0, "invalid update time");
        }
    };
    let Some(updated) = parse_timestamp(raw) else {
        tracing::debug!(issue = issue.number, raw, "unparseable updatedAt");
        return SubScore::new(50.0, "invalid update time");
    };

    let days_ago = elapsed_days(updated, now);
    let score = match days_ago {
        i64::MIN..=7 => 100.0,
        8..=14 => 75.0,
        15..=30 => 50.0,
        _ => 25.0,
    };
    SubScore::new(score, format!("updated {days_ago}d ago"))
}

fn elapsed_days(updated: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(updated)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
        .max(0)
}

/// RFC 3339 first; naive date-times and bare dates are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
