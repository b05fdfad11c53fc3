mod template;

pub use template::render_template;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::scoring::AnswerSet;

/// Load a questionnaire answers file into an [`AnswerSet`].
///
/// Format is picked by extension: `.json` parses as JSON, anything else as
/// YAML. Absent fields take their documented defaults (`"unknown"` / empty);
/// unknown top-level keys are rejected so a misspelled field name cannot
/// silently score as benign.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    if !path.exists() {
        anyhow::bail!(
            "Answers file not found at {}. Run `risk-mapper template` to generate a blank questionnaire.",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file at {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let answers: AnswerSet = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse answers: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse answers: invalid YAML in {}", path.display()))?
    };

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_answers() {
        let path = write_temp(
            "risk_mapper_test_load.yaml",
            "data_types: [iep_504]\nmfa_available: \"yes\"\n",
        );
        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.data_types, vec!["iep_504"]);
        assert_eq!(answers.mfa_available, "yes");
        assert_eq!(answers.sso_supported, "unknown");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_json_answers() {
        let path = write_temp(
            "risk_mapper_test_load.json",
            r#"{"data_types": ["health"], "sis_writeback": "yes"}"#,
        );
        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.data_types, vec!["health"]);
        assert_eq!(answers.sis_writeback, "yes");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_empty_yaml_gives_defaults() {
        let path = write_temp("risk_mapper_test_empty.yaml", "{}\n");
        let answers = load_answers(&path).unwrap();
        assert_eq!(answers, AnswerSet::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = env::temp_dir().join("risk_mapper_test_missing.yaml");
        let _ = fs::remove_file(&path);
        let err = load_answers(&path).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let path = write_temp("risk_mapper_test_bad.yaml", "data_types: [unclosed\n");
        assert!(load_answers(&path).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_misspelled_field_is_error() {
        let path = write_temp("risk_mapper_test_typo.yaml", "mfa_enabled: \"yes\"\n");
        assert!(load_answers(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}
