use std::io::IsTerminal;

use anyhow::{Context, Result};
use chrono::Duration;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::catalog::CATALOG;
use crate::scoring::{Category, ReasonCode, RiskTier, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Tier label colored by severity
fn format_tier(tier: RiskTier, use_colors: bool) -> String {
    if !use_colors {
        return tier.to_string();
    }
    match tier {
        RiskTier::Low => tier.as_str().green().to_string(),
        RiskTier::Moderate => tier.as_str().yellow().to_string(),
        RiskTier::High => tier.as_str().red().to_string(),
        RiskTier::Critical => tier.as_str().red().bold().to_string(),
    }
}

/// Format one reason-code line: points, code, explanation
/// Points column: 3 chars right-aligned; code column: 13 chars left-aligned
fn format_reason_line(reason: &ReasonCode, use_colors: bool, term_width: Option<usize>) -> String {
    let fixed_width = 3 + 2 + 13 + 2;
    let explanation = match term_width {
        Some(width) if width > fixed_width + 10 => truncate(&reason.explanation, width - fixed_width),
        Some(_) => truncate(&reason.explanation, 40),
        // No terminal (pipe), don't truncate
        None => reason.explanation.clone(),
    };

    let points_padded = format!("{:>3}", reason.points);
    let code_padded = format!("{:<13}", reason.code);
    if use_colors {
        format!(
            "{}  {}  {}",
            points_padded.bold(),
            code_padded.cyan(),
            explanation
        )
    } else {
        format!("{}  {}  {}", points_padded, code_padded, explanation)
    }
}

/// Format a complete scoring result as a multi-line report.
///
/// Shows the total with its tier, the per-category breakdown against each
/// category's cap, and up to `top` reason codes (`None` shows all of them).
pub fn format_report(result: &ScoreResult, use_colors: bool, top: Option<usize>) -> String {
    let mut lines = Vec::new();

    let headline = format!(
        "Risk score: {}/100  {}",
        result.total,
        format_tier(result.risk_tier, use_colors)
    );
    if use_colors {
        lines.push(format!("{}", headline.bold()));
    } else {
        lines.push(headline);
    }
    lines.push(String::new());

    for (category, sub_score) in result.breakdown.entries() {
        lines.push(format!(
            "  {:<26}{:>3}/{}",
            category.label(),
            sub_score,
            category.cap()
        ));
    }

    if result.reason_codes.is_empty() {
        lines.push(String::new());
        lines.push("No risk factors identified.".to_string());
        return lines.join("\n");
    }

    let shown = top.unwrap_or(result.reason_codes.len());
    let shown = shown.min(result.reason_codes.len());

    lines.push(String::new());
    lines.push(if shown < result.reason_codes.len() {
        format!(
            "Top risk factors ({} of {}):",
            shown,
            result.reason_codes.len()
        )
    } else {
        "Risk factors:".to_string()
    });

    let term_width = get_terminal_width();
    for reason in result.reason_codes.iter().take(shown) {
        lines.push(format!(
            "  {}",
            format_reason_line(reason, use_colors, term_width)
        ));
    }

    lines.join("\n")
}

/// Format the full result as pretty JSON, nothing truncated.
/// This is the persistence/scripting surface: fields appear verbatim.
pub fn format_json(result: &ScoreResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize score result")
}

/// Format one assessment as a tab-separated row for spreadsheet piping
/// Columns: name, total, tier, then the five sub-scores in scorer order
pub fn format_tsv_row(name: &str, result: &ScoreResult) -> String {
    let b = &result.breakdown;
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        name,
        result.total,
        result.risk_tier,
        b.sensitivity,
        b.exposure,
        b.security_controls,
        b.vendor_posture,
        b.integration_blast_radius
    )
}

/// Format the reason-code catalog grouped by category
pub fn format_catalog(use_colors: bool) -> String {
    let mut lines = Vec::new();

    for category in Category::all() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        let heading = format!("{} (max {})", category.label(), category.cap());
        if use_colors {
            lines.push(format!("{}", heading.bold()));
        } else {
            lines.push(heading);
        }

        for (code, cat, explanation) in CATALOG {
            if cat == category {
                let code_padded = format!("{:<13}", code);
                if use_colors {
                    lines.push(format!("  {}  {}", code_padded.cyan(), explanation));
                } else {
                    lines.push(format!("  {}  {}", code_padded, explanation));
                }
            }
        }
    }

    lines.join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{calculate_risk_score, AnswerSet};

    fn sample_result() -> ScoreResult {
        let answers = AnswerSet {
            data_types: vec!["iep_504".into(), "health".into()],
            third_party_sharing: "yes".into(),
            ..AnswerSet::default()
        };
        calculate_risk_score(&answers)
    }

    #[test]
    fn test_report_contains_total_and_tier() {
        let result = sample_result();
        let report = format_report(&result, false, Some(5));
        assert!(report.contains(&format!("Risk score: {}/100", result.total)));
        assert!(report.contains(result.risk_tier.as_str()));
    }

    #[test]
    fn test_report_lists_all_categories() {
        let report = format_report(&sample_result(), false, Some(5));
        assert!(report.contains("Sensitivity"));
        assert!(report.contains("Exposure"));
        assert!(report.contains("Security Controls"));
        assert!(report.contains("Vendor Posture"));
        assert!(report.contains("Integration Blast Radius"));
    }

    #[test]
    fn test_report_shows_caps() {
        let report = format_report(&sample_result(), false, Some(5));
        assert!(report.contains("/30"));
        assert!(report.contains("/25"));
        assert!(report.contains("/20"));
        assert!(report.contains("/15"));
        assert!(report.contains("/10"));
    }

    #[test]
    fn test_report_truncates_to_top_n() {
        let result = sample_result();
        assert!(result.reason_codes.len() > 2);
        let report = format_report(&result, false, Some(2));
        assert!(report.contains(&format!("2 of {}", result.reason_codes.len())));
        // Third-ranked code should not appear
        let third = &result.reason_codes[2].code;
        let shown: Vec<_> = result.reason_codes.iter().take(2).map(|r| &r.code).collect();
        if !shown.contains(&third) {
            assert!(!report.contains(third.as_str()));
        }
    }

    #[test]
    fn test_report_none_shows_all() {
        let result = sample_result();
        let report = format_report(&result, false, None);
        for reason in &result.reason_codes {
            assert!(report.contains(reason.code.as_str()));
        }
        assert!(report.contains("Risk factors:"));
    }

    #[test]
    fn test_report_no_factors() {
        let answers = AnswerSet {
            data_types: vec!["directory_info".into()],
            storage_location: "vendor_cloud".into(),
            data_region: "us_only".into(),
            subprocessors_disclosed: "yes".into(),
            retention_policy_stated: "yes".into(),
            deletion_process: "self_serve".into(),
            sso_supported: "google".into(),
            mfa_available: "yes".into(),
            rbac_available: "yes".into(),
            encryption_transit: "yes".into(),
            encryption_rest: "yes".into(),
            audit_logs_available: "yes".into(),
            third_party_sharing: "no".into(),
            used_for_advertising: "no".into(),
            used_for_ai_training: "no".into(),
            data_sold: "no".into(),
            integration_method: "oauth".into(),
            integration_frequency: "nightly".into(),
            sis_writeback: "no".into(),
            ..AnswerSet::default()
        };
        let result = calculate_risk_score(&answers);
        assert!(result.reason_codes.is_empty());
        let report = format_report(&result, false, Some(5));
        assert!(report.contains("No risk factors identified."));
    }

    #[test]
    fn test_json_roundtrip() {
        let result = sample_result();
        let json = format_json(&result).unwrap();
        let parsed: ScoreResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }

    #[test]
    fn test_tsv_row_columns() {
        let result = sample_result();
        let row = format_tsv_row("Acme Reader", &result);
        let fields: Vec<&str> = row.split('\t').collect();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], "Acme Reader");
        assert_eq!(fields[1], result.total.to_string());
        assert_eq!(fields[2], result.risk_tier.as_str());
    }

    #[test]
    fn test_catalog_lists_every_code() {
        let catalog = format_catalog(false);
        for (code, _, _) in CATALOG {
            assert!(catalog.contains(code), "catalog output missing {}", code);
        }
    }

    #[test]
    fn test_catalog_grouped_by_category() {
        let catalog = format_catalog(false);
        let sens_pos = catalog.find("Sensitivity (max 30)").unwrap();
        let int_pos = catalog.find("Integration Blast Radius (max 10)").unwrap();
        assert!(sens_pos < int_pos);
    }

    // truncate tests

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("Short text", 20), "Short text");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("This is a very long sentence", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_very_narrow() {
        assert_eq!(truncate("Hello world", 3), "Hel");
    }

    // format_age tests

    #[test]
    fn test_format_age_hours() {
        assert_eq!(format_age(Duration::hours(3)), "3h");
    }

    #[test]
    fn test_format_age_days() {
        assert_eq!(format_age(Duration::days(2)), "2d");
    }

    #[test]
    fn test_format_age_weeks() {
        assert_eq!(format_age(Duration::weeks(2)), "2w");
    }

    #[test]
    fn test_format_age_minutes() {
        assert_eq!(format_age(Duration::minutes(30)), "30m");
    }

    #[test]
    fn test_format_age_now() {
        assert_eq!(format_age(Duration::seconds(30)), "now");
    }
}
