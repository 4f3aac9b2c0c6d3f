//! The hand-maintained side of the comparison: the access-control matrix as
//! written in the design document, embedded verbatim — including its quirks
//! (`read` spelled out in two cells, `(homecare)` annotations, slash codes).

/// Role column order of the matrix and of every report table.
pub const ROLES: [&str; 8] = [
    "SystemAdmin",
    "Admin",
    "Manager",
    "IT",
    "Nurse",
    "Caregiver",
    "Resident",
    "Family",
];

/// SQL resource identifier → matrix display name. Identifiers absent from
/// this table fall through unchanged.
const RESOURCE_MAPPING: [(&str, &str); 23] = [
    ("cards", "cards(vital-monitor)"),
    ("roles", "roles"),
    ("users", "users"),
    ("residents", "resident"),
    ("resident_phi", "resident_phi"),
    ("resident_contacts", "resident_contacts"),
    ("resident_caregivers", "resident_caregivers"),
    ("alarm_cloud", "cloud_alarm_polices"),
    ("alarm_device", "Iot_Monitor_alarm"),
    ("tags_catalog", "tags_catalog"),
    ("service_levels", "service_level"),
    ("alarm_events", "alarm_event"),
    ("rounds", "rounds"),
    ("round_details", "round_details"),
    ("units", "units"),
    ("rooms", "rooms"),
    ("beds", "beds"),
    ("devices", "device"),
    ("config_versions", "config_versions"),
    ("iot_timeseries", "iot_timeseries"),
    ("tenants", "tenants"),
    ("role_permissions", "role-permissions"),
    ("device_store", "device-store"),
];

/// Matrix display name for a SQL resource identifier, identity when unmapped.
pub fn display_resource(sql_name: &str) -> &str {
    RESOURCE_MAPPING
        .iter()
        .find(|(sql, _)| *sql == sql_name)
        .map_or(sql_name, |(_, display)| display)
}

/// The reference matrix: one row per resource in display order, one code per
/// role in [`ROLES`] order.
pub const REFERENCE_MATRIX: [(&str, [&str; 8]); 23] = [
    (
        "cards(vital-monitor)",
        ["-", "RCDU", "R", "-", "R", "RA", "RA", "RA"],
    ),
    ("roles", ["RCDU", "RU", "RU", "read", "-", "-", "-", "-"]),
    ("users", ["-", "RCDU", "RCDU", "RCDU", "-", "-", "-", "-"]),
    (
        "resident",
        ["-", "RCDU", "RCDU", "read", "RA/UA", "RA", "-", "-"],
    ),
    (
        "resident_phi",
        ["-", "RCDU", "RCDU", "-", "RA", "RA", "-", "-"],
    ),
    (
        "resident_contacts",
        ["-", "RCDU", "RCDU", "-", "RA/UA", "RA", "RUA", "RUA"],
    ),
    (
        "resident_caregivers",
        ["-", "RCDU", "RCDU", "read", "R", "R", "-", "-"],
    ),
    (
        "cloud_alarm_polices",
        ["-", "RCDU", "RCDU", "-", "R", "R", "-", "-"],
    ),
    (
        "Iot_Monitor_alarm",
        ["-", "RCDU", "RCDU", "RCDU", "R/CA/UA", "RA", "-", "-"],
    ),
    (
        "tags_catalog",
        ["RCDU", "RCDU", "RCDU", "RCDU", "R", "R", "-", "-"],
    ),
    (
        "service_level",
        ["-", "RCDU", "RCDU", "-", "R", "R", "-", "-"],
    ),
    (
        "alarm_event",
        [
            "-",
            "RCDU",
            "RCDU",
            "R",
            "RU",
            "RU",
            "RA/RUA(homecare)",
            "RA/RUA(homecare)",
        ],
    ),
    ("rounds", ["-", "RCDU", "RCDU", "-", "RCU", "RCU", "-", "-"]),
    (
        "round_details",
        ["-", "RCDU", "RCDU", "-", "RCU", "RCU", "-", "-"],
    ),
    ("units", ["-", "RCDU", "RCDU", "RCDU", "R", "R", "-", "-"]),
    ("rooms", ["-", "RCDU", "RCDU", "RCDU", "R", "R", "-", "-"]),
    ("beds", ["-", "RCDU", "RCDU", "RCDU", "R", "R", "-", "-"]),
    ("device", ["-", "RCDU", "RCDU", "RCDU", "R", "R", "-", "-"]),
    (
        "config_versions",
        ["-", "RCDU", "-", "RCDU", "-", "-", "-", "-"],
    ),
    ("iot_timeseries", ["-", "RCDU", "R", "-", "-", "-", "-", "-"]),
    ("tenants", ["RCDU", "-", "-", "-", "-", "-", "-", "-"]),
    (
        "role-permissions",
        ["RCDU", "R", "R", "R", "-", "-", "-", "-"],
    ),
    ("device-store", ["RCDU", "RA", "RA", "RA", "-", "-", "-", "-"]),
];

/// Reference code for a (role, resource) pair, `-` for anything untracked.
pub fn reference_code(role: &str, resource: &str) -> &'static str {
    let Some(column) = ROLES.iter().position(|r| *r == role) else {
        return "-";
    };
    REFERENCE_MATRIX
        .iter()
        .find(|(res, _)| *res == resource)
        .map_or("-", |(_, codes)| codes[column])
}
