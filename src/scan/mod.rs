pub mod blockers;
pub mod context;

use crate::error::{KeepError, Result};
use crate::types::context::Context;
use crate::types::issue::{parse_issues, Issue};
use std::io::Read;
use std::path::Path;

/// Read the recent-activity document at `path`. A missing or unreadable
/// file produces the empty context.
pub fn load_context(path: &Path) -> Context {
    match std::fs::read_to_string(path) {
        Ok(content) => context::extract_context(&content),
        Err(error) => {
            tracing::info!(
                path = %path.display(),
                %error,
                "recent work unavailable, continuing without context"
            );
            Context::default()
        }
    }
}

/// Load the issue collection from `path`, or from stdin when no path is given.
pub fn load_issues(path: Option<&Path>) -> Result<Vec<Issue>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let issues = parse_issues(&raw).map_err(|e| KeepError::InvalidInput(e.to_string()))?;
    tracing::debug!(count = issues.len(), "loaded issues");
    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_context_file_is_not_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let context = load_context(&dir.path().join("state.md"));
        assert_eq!(context, Context::default());
    }

    #[test]
    fn load_context_reads_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("state.md");
        fs::write(&path, "Working primarily in src/auth/\nLast: #14").expect("state should write");

        let context = load_context(&path);
        assert_eq!(context.recent_directories, vec!["src/auth"]);
        assert_eq!(context.recent_issue_numbers, vec!["14"]);
    }

    #[test]
    fn load_issues_maps_malformed_json_to_invalid_input() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("issues.json");
        fs::write(&path, r#"[{"title": "missing number"}]"#).expect("issues should write");

        let err = load_issues(Some(&path)).expect_err("missing number should fail");
        assert!(matches!(err, KeepError::InvalidInput(_)));
    }

    #[test]
    fn load_issues_reads_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("issues.json");
        fs::write(&path, r#"{"number": 3, "title": "one"}"#).expect("issues should write");

        let issues = load_issues(Some(&path)).expect("issues should load");
        assert_eq!(issues.len(), 1);
    }
}
