use crate::types::scoring::ScoreResult;

pub const NO_RESULTS: &str = "No issues to recommend";

/// Human-readable recommendation report. Expects `results` already ranked.
pub fn format_recommendations(results: &[ScoreResult], top_n: usize) -> String {
    let Some((top, rest)) = results.split_first() else {
        return NO_RESULTS.to_string();
    };

    let mut lines = vec!["🎯 Recommended Next Work".to_string(), String::new()];

    lines.push("🔥 Hot Recommendation:".to_string());
    lines.push(format!("#{} - {}", top.number, top.title));
    lines.push(format!("├─ Score: {:.1}/100", top.total_score));
    lines.push(format!("├─ {}", top.continuity_reason));
    lines.push(format!("└─ Priority: {}", top.priority_reason));
    lines.push(String::new());

    let others = rest.iter().take(top_n.saturating_sub(1));
    if others.len() > 0 {
        lines.push("📋 Other Good Options:".to_string());
        lines.push(String::new());
        for (position, result) in (2..).zip(others) {
            lines.push(format!("{position}. #{} - {}", result.number, result.title));
            lines.push(format!(
                "   └─ Score: {:.1} | {}",
                result.total_score, result.priority_reason
            ));
            if result.dependency_score < 100.0 {
                lines.push(format!("      {}", result.dependency_reason));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::result;

    #[test]
    fn empty_results_render_fixed_message_only() {
        assert_eq!(format_recommendations(&[], 5), NO_RESULTS);
    }

    #[test]
    fn top_result_is_highlighted() {
        let mut top = result(12, 91.0);
        top.continuity_reason = "mentions auth".to_string();
        top.priority_reason = "urgent".to_string();

        let rendered = format_recommendations(&[top], 5);
        assert!(rendered.starts_with("🎯 Recommended Next Work\n\n🔥 Hot Recommendation:\n"));
        assert!(rendered.contains("#12 - Issue 12\n├─ Score: 91.0/100\n├─ mentions auth\n└─ Priority: urgent"));
        assert!(!rendered.contains("Other Good Options"));
    }

    #[test]
    fn other_options_respect_top_n_and_show_blocked_dependencies() {
        let mut blocked = result(2, 60.0);
        blocked.dependency_score = 75.0;
        blocked.dependency_reason = "blocked by #1".to_string();
        let results = vec![result(1, 80.0), blocked, result(3, 40.0), result(4, 20.0)];

        let rendered = format_recommendations(&results, 3);
        assert!(rendered.contains("📋 Other Good Options:"));
        assert!(rendered.contains("2. #2 - Issue 2\n   └─ Score: 60.0 | medium (default)\n      blocked by #1"));
        assert!(rendered.ends_with("3. #3 - Issue 3\n   └─ Score: 40.0 | medium (default)\n"));
        assert!(!rendered.contains("no dependencies"));
        assert!(!rendered.contains("#4 - Issue 4"));
    }

    #[test]
    fn top_n_of_one_lists_no_alternatives() {
        let rendered = format_recommendations(&[result(1, 80.0), result(2, 70.0)], 1);
        assert!(!rendered.contains("Other Good Options"));
        assert!(!rendered.contains("#2"));
    }
}
