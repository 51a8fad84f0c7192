use serde::Deserialize;
use std::collections::BTreeSet;

/// Lifecycle state as reported by the tracker. Anything other than
/// `OPEN`/`CLOSED` is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IssueState {
    Open,
    Closed,
    Other(String),
    #[default]
    Unknown,
}

impl IssueState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl<'de> Deserialize<'de> for IssueState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::Unknown,
            Some(value) if value.eq_ignore_ascii_case("open") => Self::Open,
            Some(value) if value.eq_ignore_ascii_case("closed") => Self::Closed,
            Some(value) => Self::Other(value),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Named { name: String },
    Bare(String),
}

impl Label {
    pub fn name(&self) -> &str {
        match self {
            Self::Named { name } | Self::Bare(name) => name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub state: IssueState,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<UpdatedAt>,
}

/// Raw `updatedAt` value. Anything that is not a string is kept as
/// [`UpdatedAt::Malformed`] instead of failing the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatedAt {
    Text(String),
    Malformed,
}

impl UpdatedAt {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(raw) => Some(raw),
            Self::Malformed => None,
        }
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<UpdatedAt>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(raw) => Some(UpdatedAt::Text(raw)),
        _ => Some(UpdatedAt::Malformed),
    })
}

impl Issue {
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// Lowercased label names; duplicates collapse.
    pub fn label_set(&self) -> BTreeSet<String> {
        self.labels
            .iter()
            .map(|label| label.name().to_lowercase())
            .collect()
    }
}

/// Accepts either a JSON array of issues or a single issue object.
pub fn parse_issues(raw: &str) -> Result<Vec<Issue>, serde_json::Error> {
    let document: serde_json::Value = serde_json::from_str(raw)?;
    if document.is_array() {
        serde_json::from_value(document)
    } else {
        serde_json::from_value::<Issue>(document).map(|issue| vec![issue])
    }
}
