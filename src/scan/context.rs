use crate::types::context::Context;

const DIRECTORY_MARKER: &str = "working primarily in";

/// Build a [`Context`] from a free-text recent-activity document.
///
/// Labels are never read from text; see [`Context::with_labels`].
pub fn extract_context(content: &str) -> Context {
    let mut context = Context::default();

    for line in content.lines() {
        for directory in directories_in_line(line) {
            context.add_directory(directory);
        }
        if line.contains('#') {
            for number in issue_references(line) {
                context.add_issue_number(number);
            }
        }
    }

    tracing::debug!(
        directories = context.recent_directories.len(),
        issues = context.recent_issue_numbers.len(),
        "extracted context"
    );
    context
}

fn directories_in_line(line: &str) -> Vec<&str> {
    // ASCII folding keeps byte offsets aligned with the original line.
    let folded = line.to_ascii_lowercase();
    let Some(start) = folded.find(DIRECTORY_MARKER) else {
        return Vec::new();
    };

    line[start + DIRECTORY_MARKER.len()..]
        .split_whitespace()
        .map(|token| token.trim_end_matches(['/', ',']))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Digit runs that directly follow a `#`.
pub fn issue_references(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] != b'#' {
            index += 1;
            continue;
        }
        let start = index + 1;
        let end = digit_run_end(bytes, start);
        if end > start {
            found.push(&text[start..end]);
        }
        index = end.max(start);
    }

    found
}

pub(crate) fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}
