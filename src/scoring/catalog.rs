use serde::{Deserialize, Serialize};
use std::fmt;

/// The five scoring categories, in the order the scorers run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "sensitivity")]
    Sensitivity,
    #[serde(rename = "exposure")]
    Exposure,
    #[serde(rename = "security_controls")]
    SecurityControls,
    #[serde(rename = "vendor_posture")]
    VendorPosture,
    #[serde(rename = "integration_blast_radius")]
    IntegrationBlastRadius,
}

impl Category {
    /// The snake_case key used in breakdowns and serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Sensitivity => "sensitivity",
            Category::Exposure => "exposure",
            Category::SecurityControls => "security_controls",
            Category::VendorPosture => "vendor_posture",
            Category::IntegrationBlastRadius => "integration_blast_radius",
        }
    }

    /// Human-readable category label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sensitivity => "Sensitivity",
            Category::Exposure => "Exposure",
            Category::SecurityControls => "Security Controls",
            Category::VendorPosture => "Vendor Posture",
            Category::IntegrationBlastRadius => "Integration Blast Radius",
        }
    }

    /// Maximum sub-score this category can contribute.
    pub fn cap(&self) -> u32 {
        match self {
            Category::Sensitivity => 30,
            Category::Exposure => 25,
            Category::SecurityControls => 20,
            Category::VendorPosture => 15,
            Category::IntegrationBlastRadius => 10,
        }
    }

    /// All categories in scorer order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Sensitivity,
            Category::Exposure,
            Category::SecurityControls,
            Category::VendorPosture,
            Category::IntegrationBlastRadius,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Sensitivity weight per data type key. Unlisted keys score 0.
pub const DATA_TYPE_POINTS: &[(&str, u32)] = &[
    // High sensitivity
    ("iep_504", 8),
    ("health", 8),
    ("behavioral_sel", 7),
    ("biometrics", 8),
    ("precise_location", 7),
    ("discipline", 6),
    // Medium sensitivity
    ("photos_video_audio", 4),
    ("staff_notes", 4),
    ("academic_records", 3),
    ("attendance_discipline", 3),
    // Low sensitivity
    ("directory_info", 2),
    ("contact_info", 2),
    ("auth_identifiers", 1),
    ("device_identifiers", 1),
];

/// Human-readable definitions of the data type keys, for the questionnaire
/// template and exports.
pub const DATA_TYPE_DEFINITIONS: &[(&str, &str)] = &[
    ("directory_info", "Directory info (name, grade, student ID)"),
    ("contact_info", "Contact info (address, parent email, phone)"),
    ("attendance_discipline", "Attendance and discipline records"),
    ("academic_records", "Academic records and grades"),
    ("iep_504", "IEP/504 or special services documentation"),
    ("health", "Health data (medical conditions, medications)"),
    ("behavioral_sel", "Behavioral/SEL data (observations, assessments)"),
    ("biometrics", "Biometric data (fingerprints, facial recognition)"),
    ("precise_location", "Precise location tracking"),
    ("photos_video_audio", "Photos, video, or audio recordings"),
    ("staff_notes", "Free-text staff notes about students"),
    ("auth_identifiers", "Authentication identifiers (SSO IDs)"),
    ("device_identifiers", "Device identifiers"),
];

/// The reason-code catalog: code, category, explanation sentence.
///
/// Static and versioned with the crate. Callers render explanations from
/// here rather than duplicating the text.
pub const CATALOG: &[(&str, Category, &str)] = &[
    // Sensitivity
    (
        "SENS-IEP",
        Category::Sensitivity,
        "System handles IEP/504 data, which is highly sensitive under FERPA and IDEA.",
    ),
    (
        "SENS-HEALTH",
        Category::Sensitivity,
        "System collects health data, protected under FERPA and potentially HIPAA.",
    ),
    (
        "SENS-BEHAV",
        Category::Sensitivity,
        "System stores behavioral/SEL data, which can be stigmatizing if mishandled.",
    ),
    (
        "SENS-BIO",
        Category::Sensitivity,
        "System uses biometric data, requiring special consent and protections.",
    ),
    (
        "SENS-LOC",
        Category::Sensitivity,
        "System tracks precise student location, raising significant privacy concerns.",
    ),
    (
        "SENS-DISC",
        Category::Sensitivity,
        "System contains discipline records, which are sensitive under FERPA.",
    ),
    (
        "SENS-MEDIA",
        Category::Sensitivity,
        "System stores student photos, video, or audio recordings.",
    ),
    (
        "SENS-UNK",
        Category::Sensitivity,
        "Data types collected are unknown, adding uncertainty to risk assessment.",
    ),
    // Exposure
    (
        "EXPO-SHARE",
        Category::Exposure,
        "Vendor indicates data is shared with third parties.",
    ),
    (
        "EXPO-ADS",
        Category::Exposure,
        "Data may be used for advertising or marketing purposes.",
    ),
    (
        "EXPO-AI",
        Category::Exposure,
        "Data may be used to train AI models.",
    ),
    (
        "EXPO-SOLD",
        Category::Exposure,
        "Vendor indicates data may be sold or monetized.",
    ),
    (
        "EXPO-SUBP",
        Category::Exposure,
        "Subprocessors are not disclosed, creating unknown exposure.",
    ),
    (
        "EXPO-GLOBAL",
        Category::Exposure,
        "Data may be stored or processed outside the US.",
    ),
    (
        "EXPO-BOTH",
        Category::Exposure,
        "Data stored in both vendor cloud and district systems increases exposure.",
    ),
    // Security Controls
    (
        "CTRL-NOSSO",
        Category::SecurityControls,
        "SSO is not supported or status is unknown.",
    ),
    (
        "CTRL-NOMFA",
        Category::SecurityControls,
        "Admin MFA is not available or unknown.",
    ),
    (
        "CTRL-NORBAC",
        Category::SecurityControls,
        "Role-based access controls are not available or unknown.",
    ),
    (
        "CTRL-NOTRANS",
        Category::SecurityControls,
        "Encryption in transit is not confirmed.",
    ),
    (
        "CTRL-NOREST",
        Category::SecurityControls,
        "Encryption at rest is not confirmed.",
    ),
    (
        "CTRL-NOAUDIT",
        Category::SecurityControls,
        "Audit logs are not available or unknown.",
    ),
    // Vendor Posture
    (
        "POST-RETUNK",
        Category::VendorPosture,
        "Retention policy is missing or unknown.",
    ),
    (
        "POST-DELUNK",
        Category::VendorPosture,
        "Data deletion process is unclear or requires manual support.",
    ),
    (
        "POST-NODEL",
        Category::VendorPosture,
        "No clear process exists for data deletion.",
    ),
    // Integration
    (
        "INT-APIKEY",
        Category::IntegrationBlastRadius,
        "Integration uses API keys, increasing blast radius if exposed.",
    ),
    (
        "INT-REALTIME",
        Category::IntegrationBlastRadius,
        "Real-time data sync increases potential impact of breaches.",
    ),
    (
        "INT-SISWB",
        Category::IntegrationBlastRadius,
        "System writes data back to SIS, amplifying integration risk.",
    ),
    (
        "INT-MULTI",
        Category::IntegrationBlastRadius,
        "Multiple integration types increase attack surface.",
    ),
];

/// Sensitivity points for a data type key. Unrecognized keys score 0.
pub fn data_type_points(key: &str) -> u32 {
    DATA_TYPE_POINTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, pts)| *pts)
        .unwrap_or(0)
}

/// Look up the explanation sentence for a reason code.
pub fn explanation(code: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, _, text)| *text)
}

/// Look up the category a reason code belongs to.
pub fn category_of(code: &str) -> Option<Category> {
    CATALOG
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, cat, _)| *cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_points_known() {
        assert_eq!(data_type_points("iep_504"), 8);
        assert_eq!(data_type_points("health"), 8);
        assert_eq!(data_type_points("academic_records"), 3);
        assert_eq!(data_type_points("device_identifiers"), 1);
    }

    #[test]
    fn test_data_type_points_unrecognized_is_zero() {
        assert_eq!(data_type_points("genome_sequence"), 0);
        assert_eq!(data_type_points(""), 0);
    }

    #[test]
    fn test_explanation_lookup() {
        assert!(explanation("SENS-IEP").unwrap().contains("IEP/504"));
        assert!(explanation("INT-MULTI").unwrap().contains("attack surface"));
        assert!(explanation("NOPE-404").is_none());
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_of("EXPO-ADS"), Some(Category::Exposure));
        assert_eq!(category_of("POST-NODEL"), Some(Category::VendorPosture));
        assert_eq!(category_of("NOPE-404"), None);
    }

    #[test]
    fn test_category_caps_sum_to_100() {
        let sum: u32 = Category::all().iter().map(|c| c.cap()).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn test_category_keys_match_serde_names() {
        let json = serde_json::to_string(&Category::IntegrationBlastRadius).unwrap();
        assert_eq!(json, "\"integration_blast_radius\"");
    }

    #[test]
    fn test_every_defined_data_type_is_scored() {
        for (key, _) in DATA_TYPE_DEFINITIONS {
            assert!(data_type_points(key) > 0, "no weight for {}", key);
        }
    }
}
