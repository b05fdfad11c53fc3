use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;

use super::answers::AnswerSet;
use super::catalog::{self, Category};

/// A single scored risk factor with its human-readable explanation.
///
/// The same code may appear more than once when different answers hit the
/// same template (e.g. `discipline` and `attendance_discipline` both emit
/// `SENS-DISC`). Entries are not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonCode {
    pub code: String,
    pub explanation: String,
    pub category: Category,
    pub points: u32,
}

/// Per-category sub-scores. Each field is clamped to its category cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sensitivity: u32,
    pub exposure: u32,
    pub security_controls: u32,
    pub vendor_posture: u32,
    pub integration_blast_radius: u32,
}

impl ScoreBreakdown {
    /// Sub-score for one category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Sensitivity => self.sensitivity,
            Category::Exposure => self.exposure,
            Category::SecurityControls => self.security_controls,
            Category::VendorPosture => self.vendor_posture,
            Category::IntegrationBlastRadius => self.integration_blast_radius,
        }
    }

    /// (category, sub-score) pairs in scorer order, for display.
    pub fn entries(&self) -> [(Category, u32); 5] {
        [
            (Category::Sensitivity, self.sensitivity),
            (Category::Exposure, self.exposure),
            (Category::SecurityControls, self.security_controls),
            (Category::VendorPosture, self.vendor_posture),
            (Category::IntegrationBlastRadius, self.integration_blast_radius),
        ]
    }
}

/// Risk tier derived from the total score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
            RiskTier::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete scoring result: total, per-category breakdown, ordered reason
/// codes, and tier. Produced once per assessment and persisted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total: u32,
    pub breakdown: ScoreBreakdown,
    pub reason_codes: Vec<ReasonCode>,
    pub risk_tier: RiskTier,
}

fn reason(code: &'static str, category: Category, points: u32) -> ReasonCode {
    ReasonCode {
        code: code.to_string(),
        explanation: catalog::explanation(code).unwrap_or("").to_string(),
        category,
        points,
    }
}

/// Reason code emitted when a data type is present. Low-sensitivity types
/// contribute points but stay silent.
fn sensitivity_reason_code(data_type: &str) -> Option<&'static str> {
    match data_type {
        "iep_504" => Some("SENS-IEP"),
        "health" => Some("SENS-HEALTH"),
        "behavioral_sel" => Some("SENS-BEHAV"),
        "biometrics" => Some("SENS-BIO"),
        "precise_location" => Some("SENS-LOC"),
        "discipline" | "attendance_discipline" => Some("SENS-DISC"),
        "photos_video_audio" => Some("SENS-MEDIA"),
        _ => None,
    }
}

/// Sensitivity score (0-30) from the data types collected.
///
/// `data_types_unknown` is an override: flat 10 points and a single
/// `SENS-UNK`, with `data_types` ignored entirely.
pub fn calculate_sensitivity_score(answers: &AnswerSet) -> (u32, Vec<ReasonCode>) {
    let cap = Category::Sensitivity.cap();
    let mut score = 0;
    let mut reasons = Vec::new();

    if answers.data_types_unknown {
        score += 10;
        reasons.push(reason("SENS-UNK", Category::Sensitivity, 10));
        return (score.min(cap), reasons);
    }

    // Set semantics: a key listed twice counts once
    let mut seen = HashSet::new();
    for data_type in &answers.data_types {
        if !seen.insert(data_type.as_str()) {
            continue;
        }
        let points = catalog::data_type_points(data_type);
        score += points;

        if let Some(code) = sensitivity_reason_code(data_type) {
            reasons.push(reason(code, Category::Sensitivity, points));
        }
    }

    (score.min(cap), reasons)
}

/// Exposure score (0-25) from sharing, secondary use, and storage answers.
///
/// "yes" carries the full penalty and a reason code; "unknown" carries a
/// smaller penalty and, except for subprocessor disclosure, no code.
pub fn calculate_exposure_score(answers: &AnswerSet) -> (u32, Vec<ReasonCode>) {
    let mut score = 0;
    let mut reasons = Vec::new();

    match answers.third_party_sharing.as_str() {
        "yes" => {
            score += 6;
            reasons.push(reason("EXPO-SHARE", Category::Exposure, 6));
        }
        "unknown" => score += 4,
        _ => {}
    }

    match answers.used_for_advertising.as_str() {
        "yes" => {
            score += 5;
            reasons.push(reason("EXPO-ADS", Category::Exposure, 5));
        }
        "unknown" => score += 3,
        _ => {}
    }

    match answers.used_for_ai_training.as_str() {
        "yes" => {
            score += 4;
            reasons.push(reason("EXPO-AI", Category::Exposure, 4));
        }
        "unknown" => score += 2,
        _ => {}
    }

    match answers.data_sold.as_str() {
        "yes" => {
            score += 6;
            reasons.push(reason("EXPO-SOLD", Category::Exposure, 6));
        }
        "unknown" => score += 4,
        _ => {}
    }

    // Undisclosed subprocessors get a code even when merely unknown
    match answers.subprocessors_disclosed.as_str() {
        "no" => {
            score += 4;
            reasons.push(reason("EXPO-SUBP", Category::Exposure, 4));
        }
        "unknown" => {
            score += 3;
            reasons.push(reason("EXPO-SUBP", Category::Exposure, 3));
        }
        _ => {}
    }

    match answers.data_region.as_str() {
        "global" => {
            score += 3;
            reasons.push(reason("EXPO-GLOBAL", Category::Exposure, 3));
        }
        "unknown" => score += 2,
        _ => {}
    }

    match answers.storage_location.as_str() {
        "both" => {
            score += 2;
            reasons.push(reason("EXPO-BOTH", Category::Exposure, 2));
        }
        "unknown" => score += 2,
        _ => {}
    }

    (score.min(Category::Exposure.cap()), reasons)
}

/// Security controls score (0-20). Absent or unconfirmed controls add
/// points; "no" and "unknown" are treated identically.
pub fn calculate_security_score(answers: &AnswerSet) -> (u32, Vec<ReasonCode>) {
    let mut score = 0;
    let mut reasons = Vec::new();

    if matches!(answers.sso_supported.as_str(), "none" | "unknown") {
        score += 4;
        reasons.push(reason("CTRL-NOSSO", Category::SecurityControls, 4));
    }

    if answers.mfa_available != "yes" {
        score += 4;
        reasons.push(reason("CTRL-NOMFA", Category::SecurityControls, 4));
    }

    if answers.rbac_available != "yes" {
        score += 3;
        reasons.push(reason("CTRL-NORBAC", Category::SecurityControls, 3));
    }

    if answers.encryption_transit != "yes" {
        score += 3;
        reasons.push(reason("CTRL-NOTRANS", Category::SecurityControls, 3));
    }

    if answers.encryption_rest != "yes" {
        score += 3;
        reasons.push(reason("CTRL-NOREST", Category::SecurityControls, 3));
    }

    if answers.audit_logs_available != "yes" {
        score += 3;
        reasons.push(reason("CTRL-NOAUDIT", Category::SecurityControls, 3));
    }

    (score.min(Category::SecurityControls.cap()), reasons)
}

/// Vendor posture score (0-15) from retention and deletion clarity.
pub fn calculate_posture_score(answers: &AnswerSet) -> (u32, Vec<ReasonCode>) {
    let mut score = 0;
    let mut reasons = Vec::new();

    if answers.retention_policy_stated != "yes" {
        score += 6;
        reasons.push(reason("POST-RETUNK", Category::VendorPosture, 6));
    }

    // "unknown" and "support_ticket" share POST-DELUNK at different weights
    match answers.deletion_process.as_str() {
        "no" => {
            score += 6;
            reasons.push(reason("POST-NODEL", Category::VendorPosture, 6));
        }
        "unknown" => {
            score += 5;
            reasons.push(reason("POST-DELUNK", Category::VendorPosture, 5));
        }
        "support_ticket" => {
            score += 3;
            reasons.push(reason("POST-DELUNK", Category::VendorPosture, 3));
        }
        _ => {}
    }

    (score.min(Category::VendorPosture.cap()), reasons)
}

/// Integration blast-radius score (0-10).
pub fn calculate_integration_score(answers: &AnswerSet) -> (u32, Vec<ReasonCode>) {
    let mut score = 0;
    let mut reasons = Vec::new();

    match answers.integration_method.as_str() {
        "api_key" => {
            score += 3;
            reasons.push(reason("INT-APIKEY", Category::IntegrationBlastRadius, 3));
        }
        "unknown" => score += 2,
        _ => {}
    }

    match answers.integration_frequency.as_str() {
        "realtime" => {
            score += 3;
            reasons.push(reason("INT-REALTIME", Category::IntegrationBlastRadius, 3));
        }
        "unknown" => score += 1,
        _ => {}
    }

    match answers.sis_writeback.as_str() {
        "yes" => {
            score += 3;
            reasons.push(reason("INT-SISWB", Category::IntegrationBlastRadius, 3));
        }
        "unknown" => score += 2,
        _ => {}
    }

    // Breadth threshold: three or more distinct integration types
    let distinct: HashSet<&str> = answers.integration_types.iter().map(|t| t.as_str()).collect();
    if distinct.len() >= 3 {
        score += 2;
        reasons.push(reason("INT-MULTI", Category::IntegrationBlastRadius, 2));
    }

    (score.min(Category::IntegrationBlastRadius.cap()), reasons)
}

/// Map a total score to its risk tier.
pub fn determine_risk_tier(total: u32) -> RiskTier {
    if total <= 25 {
        RiskTier::Low
    } else if total <= 50 {
        RiskTier::Moderate
    } else if total <= 75 {
        RiskTier::High
    } else {
        RiskTier::Critical
    }
}

/// Score a complete answer set.
///
/// Pure function of its input: runs the five category scorers, sums their
/// clamped sub-scores (clamped again to 100), and merges the reason codes
/// sorted by points descending. The sort is stable, so equal-point codes
/// keep the scorer order: sensitivity, exposure, security, posture,
/// integration.
pub fn calculate_risk_score(answers: &AnswerSet) -> ScoreResult {
    let (sens_score, sens_reasons) = calculate_sensitivity_score(answers);
    let (expo_score, expo_reasons) = calculate_exposure_score(answers);
    let (sec_score, sec_reasons) = calculate_security_score(answers);
    let (post_score, post_reasons) = calculate_posture_score(answers);
    let (int_score, int_reasons) = calculate_integration_score(answers);

    let total = (sens_score + expo_score + sec_score + post_score + int_score).min(100);

    let mut reason_codes = sens_reasons;
    reason_codes.extend(expo_reasons);
    reason_codes.extend(sec_reasons);
    reason_codes.extend(post_reasons);
    reason_codes.extend(int_reasons);
    reason_codes.sort_by_key(|r| Reverse(r.points));

    ScoreResult {
        total,
        breakdown: ScoreBreakdown {
            sensitivity: sens_score,
            exposure: expo_score,
            security_controls: sec_score,
            vendor_posture: post_score,
            integration_blast_radius: int_score,
        },
        reason_codes,
        risk_tier: determine_risk_tier(total),
    }
}
