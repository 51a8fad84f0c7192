use crate::error::KeepError;
use serde::Deserialize;

pub const DEFAULT_RECENT_WORK: &str = ".claude/state.md";
pub const DEFAULT_TOP: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeepConfig {
    pub context: Option<ContextConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextConfig {
    pub recent_work: Option<String>,
    #[serde(default)]
    pub recent_labels: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfiguredFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub top: Option<usize>,
    pub format: Option<ConfiguredFormat>,
}

impl KeepConfig {
    pub fn recent_work(&self) -> &str {
        self.context
            .as_ref()
            .and_then(|context| context.recent_work.as_deref())
            .unwrap_or(DEFAULT_RECENT_WORK)
    }

    pub fn recent_labels(&self) -> &[String] {
        self.context
            .as_ref()
            .map(|context| context.recent_labels.as_slice())
            .unwrap_or_default()
    }

    pub fn top(&self) -> usize {
        self.report
            .as_ref()
            .and_then(|report| report.top)
            .unwrap_or(DEFAULT_TOP)
    }

    pub fn format(&self) -> Option<ConfiguredFormat> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn validate(&self) -> Result<(), KeepError> {
        if self.top() == 0 {
            return Err(KeepError::ConfigParse(
                "report.top must be greater than 0".to_string(),
            ));
        }

        if let Some(context) = &self.context {
            if context
                .recent_work
                .as_deref()
                .is_some_and(|path| path.trim().is_empty())
            {
                return Err(KeepError::ConfigParse(
                    "context.recent_work cannot be empty".to_string(),
                ));
            }
            if context
                .recent_labels
                .iter()
                .any(|label| label.trim().is_empty())
            {
                return Err(KeepError::ConfigParse(
                    "context.recent_labels cannot contain empty labels".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_sections_are_missing() {
        let config: KeepConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(config.recent_work(), DEFAULT_RECENT_WORK);
        assert_eq!(config.top(), DEFAULT_TOP);
        assert!(config.recent_labels().is_empty());
        assert!(config.format().is_none());
        config.validate().expect("defaults should validate");
    }

    #[test]
    fn reads_context_and_report_sections() {
        let config: KeepConfig = toml::from_str(
            r#"
[context]
recent_work = "notes/state.md"
recent_labels = ["auth", "api"]

[report]
top = 3
format = "json"
"#,
        )
        .expect("config should parse");

        assert_eq!(config.recent_work(), "notes/state.md");
        assert_eq!(config.recent_labels(), ["auth", "api"]);
        assert_eq!(config.top(), 3);
        assert_eq!(config.format(), Some(ConfiguredFormat::Json));
    }

    #[test]
    fn validate_rejects_zero_top() {
        let config: KeepConfig = toml::from_str("[report]\ntop = 0\n").expect("config should parse");
        let err = config.validate().expect_err("zero top should be rejected");
        assert!(err.to_string().contains("report.top"));
    }

    #[test]
    fn validate_rejects_blank_labels() {
        let config: KeepConfig = toml::from_str("[context]\nrecent_labels = [\" \"]\n")
            .expect("config should parse");
        assert!(config.validate().is_err());
    }
}
