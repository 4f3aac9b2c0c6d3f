use std::fmt::Write;

use crate::routes::table;
use crate::routes::RouteConfig;

/// Build the route permission check report: a per-route diff against the
/// reference table, a per-role listing of accessible pages, totals, and an
/// overall verdict.
pub fn build_report(config: &RouteConfig) -> String {
    let rule = "=".repeat(80);
    let dash = "-".repeat(80);
    let mut report = String::new();

    writeln!(report, "{rule}").unwrap();
    writeln!(report, "Route Permission Check Report").unwrap();
    writeln!(report, "{rule}").unwrap();
    writeln!(report).unwrap();

    writeln!(report, "[Per-route check]").unwrap();
    writeln!(report, "{dash}").unwrap();

    let mut has_error = false;
    for (path, expected) in table::REFERENCE {
        let current = config.roles_for(path);
        let missing: Vec<&str> = expected
            .iter()
            .copied()
            .filter(|role| !current.iter().any(|c| c == role))
            .collect();
        let extra: Vec<&str> = current
            .iter()
            .map(String::as_str)
            .filter(|role| !expected.contains(role))
            .collect();

        if missing.is_empty() && extra.is_empty() {
            writeln!(report, "✅ {}", table::page_name(path)).unwrap();
        } else {
            has_error = true;
            writeln!(report, "❌ {}", table::page_name(path)).unwrap();
            if !missing.is_empty() {
                writeln!(report, "   Missing roles: {}", missing.join(", ")).unwrap();
            }
            if !extra.is_empty() {
                writeln!(report, "   Extra roles: {}", extra.join(", ")).unwrap();
            }
        }
    }

    writeln!(report).unwrap();
    writeln!(report, "[Per-role check - pages accessible to each role]").unwrap();
    writeln!(report, "{dash}").unwrap();

    for role in table::ALL_ROLES {
        let pages: Vec<&str> = config
            .0
            .iter()
            .filter(|(_, roles)| roles.iter().any(|r| r == role))
            .map(|(path, _)| table::page_name(path))
            .collect();
        writeln!(report, "{role}: {} pages", pages.len()).unwrap();
        writeln!(report, "  {}", pages.join(", ")).unwrap();
        writeln!(report).unwrap();
    }

    writeln!(report, "[Statistics]").unwrap();
    writeln!(report, "{dash}").unwrap();
    writeln!(report, "Total routes: {}", table::REFERENCE.len()).unwrap();
    writeln!(report, "Total roles: {}", table::ALL_ROLES.len()).unwrap();
    writeln!(report).unwrap();

    if has_error {
        writeln!(report, "❌ Route permission mismatches found, review the entries above").unwrap();
    } else {
        writeln!(report, "✅ All route permissions match the reference table!").unwrap();
    }
    writeln!(report, "{rule}").unwrap();

    report
}
