use crate::types::scoring::ScoreResult;

pub fn to_json(results: &[ScoreResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::result;

    #[test]
    fn json_uses_flat_snake_case_fields() {
        let rendered = to_json(&[result(4, 57.5)]).expect("json should serialize");
        assert!(rendered.contains("\"total_score\": 57.5"));
        assert!(rendered.contains("\"dependency_reason\": \"no dependencies\""));
        assert!(rendered.contains("\"number\": 4"));
    }

    #[test]
    fn empty_results_serialize_as_empty_array() {
        assert_eq!(to_json(&[]).expect("json should serialize"), "[]");
    }
}
