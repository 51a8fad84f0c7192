use serde::Serialize;

/// Structured signal set describing recently performed work.
///
/// Every collection keeps first-found order and holds no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    pub recent_directories: Vec<String>,
    pub recent_labels: Vec<String>,
    pub recent_issue_numbers: Vec<String>,
}

impl Context {
    pub fn add_directory(&mut self, directory: &str) {
        push_unique(&mut self.recent_directories, directory);
    }

    pub fn add_label(&mut self, label: &str) {
        push_unique(&mut self.recent_labels, label);
    }

    pub fn add_issue_number(&mut self, number: &str) {
        push_unique(&mut self.recent_issue_numbers, number);
    }

    /// Labels supplied structurally by the caller (config or CLI); text
    /// extraction never fills this set.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.add_label(label.as_ref());
        }
        self
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}
