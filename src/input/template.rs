use crate::scoring::answers::{
    DATA_REGIONS, DELETION_PROCESSES, INTEGRATION_FREQUENCIES, INTEGRATION_METHODS,
    INTEGRATION_TYPES, SSO_OPTIONS, STORAGE_LOCATIONS, YES_NO_UNKNOWN,
};
use crate::scoring::catalog::DATA_TYPE_DEFINITIONS;

fn push_enum_field(out: &mut String, name: &str, allowed: &[&str]) {
    out.push_str(&format!("# {}\n", allowed.join(" | ")));
    out.push_str(&format!("{}: unknown\n\n", name));
}

/// Render a blank questionnaire as annotated YAML.
///
/// Every field is present at its default value, so the untouched template
/// parses to the all-default answer set.
pub fn render_template() -> String {
    let mut out = String::new();

    out.push_str("# Student-data risk questionnaire for one edtech system.\n");
    out.push_str("# Fill in what you know. Anything left at \"unknown\" still scores:\n");
    out.push_str("# unknowns count as partial risk, never as risk-free.\n\n");

    out.push_str("# Data types the system collects. Known keys:\n");
    for (key, definition) in DATA_TYPE_DEFINITIONS {
        out.push_str(&format!("#   {:<22}{}\n", key, definition));
    }
    out.push_str("data_types: []\n\n");

    out.push_str("# Set true if nobody knows what the system collects (overrides data_types).\n");
    out.push_str("data_types_unknown: false\n\n");

    out.push_str("# --- Storage and processing ---\n\n");
    push_enum_field(&mut out, "storage_location", STORAGE_LOCATIONS);
    push_enum_field(&mut out, "data_region", DATA_REGIONS);
    push_enum_field(&mut out, "subprocessors_disclosed", YES_NO_UNKNOWN);
    push_enum_field(&mut out, "retention_policy_stated", YES_NO_UNKNOWN);
    push_enum_field(&mut out, "deletion_process", DELETION_PROCESSES);

    out.push_str("# --- Access and security controls ---\n\n");
    push_enum_field(&mut out, "sso_supported", SSO_OPTIONS);
    push_enum_field(&mut out, "mfa_available", YES_NO_UNKNOWN);
    push_enum_field(&mut out, "rbac_available", YES_NO_UNKNOWN);
    push_enum_field(&mut out, "encryption_transit", YES_NO_UNKNOWN);
    push_enum_field(&mut out, "encryption_rest", YES_NO_UNKNOWN);
    push_enum_field(&mut out, "audit_logs_available", YES_NO_UNKNOWN);

    out.push_str("# --- Sharing and secondary use ---\n\n");
    push_enum_field(&mut out, "third_party_sharing", YES_NO_UNKNOWN);
    push_enum_field(&mut out, "used_for_advertising", YES_NO_UNKNOWN);
    push_enum_field(&mut out, "used_for_ai_training", YES_NO_UNKNOWN);
    push_enum_field(&mut out, "data_sold", YES_NO_UNKNOWN);

    out.push_str("# --- Integrations ---\n\n");
    out.push_str(&format!(
        "# Known keys: {}\n",
        INTEGRATION_TYPES.join(" | ")
    ));
    out.push_str("integration_types: []\n\n");
    push_enum_field(&mut out, "integration_method", INTEGRATION_METHODS);
    push_enum_field(&mut out, "integration_frequency", INTEGRATION_FREQUENCIES);
    push_enum_field(&mut out, "sis_writeback", YES_NO_UNKNOWN);

    out
}
