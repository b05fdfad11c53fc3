use serde::{Deserialize, Serialize};

/// Accepted values for most yes/no controls.
pub const YES_NO_UNKNOWN: &[&str] = &["yes", "no", "unknown"];

/// Accepted values for `storage_location`.
pub const STORAGE_LOCATIONS: &[&str] = &["vendor_cloud", "district", "both", "unknown"];

/// Accepted values for `data_region`.
pub const DATA_REGIONS: &[&str] = &["us_only", "eu", "global", "unknown"];

/// Accepted values for `sso_supported`.
pub const SSO_OPTIONS: &[&str] = &["entra", "google", "other", "none", "unknown"];

/// Accepted values for `deletion_process`.
pub const DELETION_PROCESSES: &[&str] = &["self_serve", "support_ticket", "no", "unknown"];

/// Accepted values for `integration_method`.
pub const INTEGRATION_METHODS: &[&str] = &["oauth", "api_key", "csv_manual", "unknown"];

/// Accepted values for `integration_frequency`.
pub const INTEGRATION_FREQUENCIES: &[&str] = &["realtime", "nightly", "adhoc", "unknown"];

/// Known `integration_types` entries.
pub const INTEGRATION_TYPES: &[&str] = &["sis", "lms", "sso", "oneroster", "api", "csv_upload"];

fn unknown() -> String {
    "unknown".to_string()
}

/// Structured questionnaire answers for one edtech system.
///
/// Every enumerated field defaults to `"unknown"` when absent and every
/// set-valued field defaults to empty, so a partially filled questionnaire
/// still scores (unknowns count as partial risk, not zero risk).
///
/// Enumerated fields are plain strings: the scoring engine is total over any
/// value and treats unrecognized strings as benign. Vocabulary membership is
/// checked separately by [`validate_answers`](super::validate_answers) before
/// scoring.
///
/// Example YAML:
/// ```yaml
/// data_types: [iep_504, directory_info]
/// sso_supported: entra
/// mfa_available: "yes"
/// third_party_sharing: "no"
/// deletion_process: self_serve
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnswerSet {
    /// Data type keys collected by the system (see `catalog::DATA_TYPE_DEFINITIONS`)
    #[serde(default)]
    pub data_types: Vec<String>,

    /// True when the district does not know what the system collects.
    /// Overrides `data_types` entirely.
    #[serde(default)]
    pub data_types_unknown: bool,

    /// Where data lives: vendor_cloud | district | both | unknown
    #[serde(default = "unknown")]
    pub storage_location: String,

    /// Hosting region: us_only | eu | global | unknown
    #[serde(default = "unknown")]
    pub data_region: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub subprocessors_disclosed: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub retention_policy_stated: String,

    /// self_serve | support_ticket | no | unknown
    #[serde(default = "unknown")]
    pub deletion_process: String,

    /// entra | google | other | none | unknown
    #[serde(default = "unknown")]
    pub sso_supported: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub mfa_available: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub rbac_available: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub encryption_transit: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub encryption_rest: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub audit_logs_available: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub third_party_sharing: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub used_for_advertising: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub used_for_ai_training: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub data_sold: String,

    /// Integration type keys: sis | lms | sso | oneroster | api | csv_upload
    #[serde(default)]
    pub integration_types: Vec<String>,

    /// oauth | api_key | csv_manual | unknown
    #[serde(default = "unknown")]
    pub integration_method: String,

    /// realtime | nightly | adhoc | unknown
    #[serde(default = "unknown")]
    pub integration_frequency: String,

    /// yes | no | unknown
    #[serde(default = "unknown")]
    pub sis_writeback: String,
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self {
            data_types: Vec::new(),
            data_types_unknown: false,
            storage_location: unknown(),
            data_region: unknown(),
            subprocessors_disclosed: unknown(),
            retention_policy_stated: unknown(),
            deletion_process: unknown(),
            sso_supported: unknown(),
            mfa_available: unknown(),
            rbac_available: unknown(),
            encryption_transit: unknown(),
            encryption_rest: unknown(),
            audit_logs_available: unknown(),
            third_party_sharing: unknown(),
            used_for_advertising: unknown(),
            used_for_ai_training: unknown(),
            data_sold: unknown(),
            integration_types: Vec::new(),
            integration_method: unknown(),
            integration_frequency: unknown(),
            sis_writeback: unknown(),
        }
    }
}
