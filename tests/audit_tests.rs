use mocksweep::audit::cell::{derive_table, normalize_code};
use mocksweep::audit::grant::GrantExtractor;

fn derive(sql: &str) -> std::collections::HashMap<String, std::collections::HashMap<String, String>>
{
    derive_table(&GrantExtractor::new().extract(sql))
}

#[test]
fn manage_grant_derives_the_full_code_in_letter_order() {
    let table = derive("(NULL, 'Admin', 'users', 'manage', 'all')");
    assert_eq!(table["Admin"]["users"], "RCDU");
}

#[test]
fn restricted_read_grant_derives_the_scoped_code() {
    let table = derive("(NULL, 'Nurse', 'resident_phi', 'read', 'assigned_only')");
    assert_eq!(table["Nurse"]["resident_phi"], "RA");
}

#[test]
fn restricted_read_and_update_derive_the_split_code() {
    let table = derive(
        "(NULL, 'Nurse', 'residents', 'read', 'assigned_only'),\n\
         (NULL, 'Nurse', 'residents', 'update', 'self_only')",
    );
    // The individual scopes differ; the split code wins regardless.
    assert_eq!(table["Nurse"]["resident"], "RA/UA");
}

#[test]
fn unknown_roles_are_dropped_silently() {
    let table = derive(
        "(NULL, 'Auditor', 'users', 'manage', 'all'),\n\
         (NULL, 'Admin', 'users', 'read', 'all')",
    );
    assert!(!table.contains_key("Auditor"));
    assert_eq!(table["Admin"]["users"], "R");
}

#[test]
fn unmapped_resources_keep_their_raw_sql_name() {
    let table = derive("(NULL, 'Admin', 'audit_log', 'read', 'all')");
    assert_eq!(table["Admin"]["audit_log"], "R");
}

#[test]
fn normalization_matches_reordered_and_annotated_codes() {
    assert_eq!(normalize_code("RA/UA"), normalize_code("UA/RA"));
    assert_eq!(normalize_code("RA/RUA(homecare)"), normalize_code("RUA/RA"));
    assert_eq!(normalize_code("RCDU"), normalize_code("CDRU"));
    assert_ne!(normalize_code("RA"), normalize_code("RA/RUA"));
    assert_ne!(normalize_code("R"), normalize_code("read"));
}
