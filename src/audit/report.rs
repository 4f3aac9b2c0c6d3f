use std::collections::HashMap;
use std::fmt::Write;

use crate::audit::cell::normalize_code;
use crate::audit::matrix;

/// One disagreement between the seeded permissions and the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Role column the disagreement is in.
    pub role: String,
    /// Resource row the disagreement is in.
    pub resource: String,
    /// Code derived from the seed file.
    pub derived: String,
    /// Code the matrix prescribes.
    pub reference: String,
}

/// Build the markdown comparison report: one table row per matrix resource,
/// one column per role, mismatching cells flagged inline, followed by the
/// flat differences list.
///
/// `derived` is the role → resource → code table from
/// [`crate::audit::cell::derive_table`]; pairs it does not contain derive as
/// `-`. Mismatches are collected row-major, so the differences list is in
/// resource-major, role-minor order.
pub fn build_report(derived: &HashMap<String, HashMap<String, String>>) -> String {
    let mut report = String::new();

    writeln!(report, "## Permission Comparison: SQL vs Matrix Table").unwrap();
    writeln!(report).unwrap();
    writeln!(
        report,
        "| Resource | SystemAdmin | Admin | Manager | IT | Nurse | Caregiver | Resident | Family |"
    )
    .unwrap();
    writeln!(
        report,
        "|----------|-------------|-------|---------|-----|-------|-----------|----------|--------|"
    )
    .unwrap();

    let mut mismatches = Vec::new();

    for (resource, reference_codes) in &matrix::REFERENCE_MATRIX {
        let mut row = vec![(*resource).to_string()];
        for (column, role) in matrix::ROLES.iter().enumerate() {
            let derived_code = derived
                .get(*role)
                .and_then(|resources| resources.get(*resource))
                .map_or("-", String::as_str);
            let reference = reference_codes[column];

            if normalize_code(derived_code) == normalize_code(reference) {
                row.push(derived_code.to_string());
            } else {
                row.push(format!("**{derived_code}** ❌ (Matrix: {reference})"));
                mismatches.push(Mismatch {
                    role: (*role).to_string(),
                    resource: (*resource).to_string(),
                    derived: derived_code.to_string(),
                    reference: reference.to_string(),
                });
            }
        }
        writeln!(report, "| {} |", row.join(" | ")).unwrap();
    }

    writeln!(report).unwrap();
    writeln!(report, "## Differences Found:").unwrap();
    writeln!(report).unwrap();

    if mismatches.is_empty() {
        writeln!(report, "✅ No differences found!").unwrap();
    } else {
        for m in &mismatches {
            writeln!(
                report,
                "- {} - {}: SQL={}, Matrix={}",
                m.role, m.resource, m.derived, m.reference
            )
            .unwrap();
        }
    }

    report
}
