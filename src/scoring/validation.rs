use super::answers::{
    AnswerSet, DATA_REGIONS, DELETION_PROCESSES, INTEGRATION_FREQUENCIES, INTEGRATION_METHODS,
    INTEGRATION_TYPES, SSO_OPTIONS, STORAGE_LOCATIONS, YES_NO_UNKNOWN,
};
use super::catalog::DATA_TYPE_POINTS;

fn check(errors: &mut Vec<String>, field: &str, value: &str, allowed: &[&str]) {
    if !allowed.contains(&value) {
        errors.push(format!(
            "answers.{}: invalid value '{}' (allowed: {})",
            field,
            value,
            allowed.join(", ")
        ));
    }
}

/// Validate answers against the canonical vocabularies before scoring.
/// Returns all validation errors at once (not just the first).
///
/// The engine itself scores any string, so this is the caller's chance to
/// distinguish "known-safe" from "malformed-and-silently-ignored".
pub fn validate_answers(answers: &AnswerSet) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check(
        &mut errors,
        "storage_location",
        &answers.storage_location,
        STORAGE_LOCATIONS,
    );
    check(&mut errors, "data_region", &answers.data_region, DATA_REGIONS);
    check(
        &mut errors,
        "subprocessors_disclosed",
        &answers.subprocessors_disclosed,
        YES_NO_UNKNOWN,
    );
    check(
        &mut errors,
        "retention_policy_stated",
        &answers.retention_policy_stated,
        YES_NO_UNKNOWN,
    );
    check(
        &mut errors,
        "deletion_process",
        &answers.deletion_process,
        DELETION_PROCESSES,
    );
    check(&mut errors, "sso_supported", &answers.sso_supported, SSO_OPTIONS);
    check(
        &mut errors,
        "mfa_available",
        &answers.mfa_available,
        YES_NO_UNKNOWN,
    );
    check(
        &mut errors,
        "rbac_available",
        &answers.rbac_available,
        YES_NO_UNKNOWN,
    );
    check(
        &mut errors,
        "encryption_transit",
        &answers.encryption_transit,
        YES_NO_UNKNOWN,
    );
    check(
        &mut errors,
        "encryption_rest",
        &answers.encryption_rest,
        YES_NO_UNKNOWN,
    );
    check(
        &mut errors,
        "audit_logs_available",
        &answers.audit_logs_available,
        YES_NO_UNKNOWN,
    );
    check(
        &mut errors,
        "third_party_sharing",
        &answers.third_party_sharing,
        YES_NO_UNKNOWN,
    );
    check(
        &mut errors,
        "used_for_advertising",
        &answers.used_for_advertising,
        YES_NO_UNKNOWN,
    );
    check(
        &mut errors,
        "used_for_ai_training",
        &answers.used_for_ai_training,
        YES_NO_UNKNOWN,
    );
    check(&mut errors, "data_sold", &answers.data_sold, YES_NO_UNKNOWN);
    check(
        &mut errors,
        "integration_method",
        &answers.integration_method,
        INTEGRATION_METHODS,
    );
    check(
        &mut errors,
        "integration_frequency",
        &answers.integration_frequency,
        INTEGRATION_FREQUENCIES,
    );
    check(
        &mut errors,
        "sis_writeback",
        &answers.sis_writeback,
        YES_NO_UNKNOWN,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Set entries the scorer will silently ignore: unrecognized `data_types`
/// and `integration_types` keys. Surfaced as warnings rather than errors
/// because they never change the score.
pub fn unrecognized_keys(answers: &AnswerSet) -> Vec<String> {
    let mut warnings = Vec::new();

    for key in &answers.data_types {
        if !DATA_TYPE_POINTS.iter().any(|(k, _)| k == key) {
            warnings.push(format!("answers.data_types: unrecognized key '{}'", key));
        }
    }

    for key in &answers.integration_types {
        if !INTEGRATION_TYPES.contains(&key.as_str()) {
            warnings.push(format!(
                "answers.integration_types: unrecognized key '{}'",
                key
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_answers_are_valid() {
        assert!(validate_answers(&AnswerSet::default()).is_ok());
    }

    #[test]
    fn test_invalid_enum_value_reports_field_and_allowed() {
        let answers = AnswerSet {
            mfa_available: "maybe".into(),
            ..AnswerSet::default()
        };
        let errors = validate_answers(&answers).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("answers.mfa_available"));
        assert!(errors[0].contains("'maybe'"));
        assert!(errors[0].contains("yes, no, unknown"));
    }

    #[test]
    fn test_collects_all_errors() {
        let answers = AnswerSet {
            storage_location: "s3".into(),
            deletion_process: "eventually".into(),
            sso_supported: "ldap".into(),
            ..AnswerSet::default()
        };
        let errors = validate_answers(&answers).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_data_types_not_checked_as_errors() {
        // Unknown set entries are warnings, not validation failures
        let answers = AnswerSet {
            data_types: vec!["shoe_size".into()],
            ..AnswerSet::default()
        };
        assert!(validate_answers(&answers).is_ok());
    }

    #[test]
    fn test_unrecognized_keys_warnings() {
        let answers = AnswerSet {
            data_types: vec!["health".into(), "shoe_size".into()],
            integration_types: vec!["sis".into(), "fax".into()],
            ..AnswerSet::default()
        };
        let warnings = unrecognized_keys(&answers);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("shoe_size"));
        assert!(warnings[1].contains("fax"));
    }

    #[test]
    fn test_recognized_keys_no_warnings() {
        let answers = AnswerSet {
            data_types: vec!["discipline".into(), "iep_504".into()],
            integration_types: vec!["oneroster".into()],
            ..AnswerSet::default()
        };
        assert!(unrecognized_keys(&answers).is_empty());
    }
}
