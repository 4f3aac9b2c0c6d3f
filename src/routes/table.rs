//! The reference side of the route check, lifted from the route design
//! document: which roles may reach each page.

/// Every role the frontend knows, in display order.
pub const ALL_ROLES: [&str; 8] = [
    "SystemAdmin",
    "Admin",
    "Manager",
    "IT",
    "Nurse",
    "Caregiver",
    "Resident",
    "Family",
];

/// Route path → roles allowed on it.
pub const REFERENCE: [(&str, &[&str]); 16] = [
    (
        "/monitoring/overview",
        &[
            "SystemAdmin",
            "Admin",
            "Manager",
            "IT",
            "Nurse",
            "Caregiver",
            "Resident",
            "Family",
        ],
    ),
    (
        "/alarm/records",
        &[
            "Admin",
            "Manager",
            "IT",
            "Nurse",
            "Caregiver",
            "Resident",
            "Family",
        ],
    ),
    (
        "/alarm/settings",
        &[
            "Admin",
            "Manager",
            "IT",
            "Nurse",
            "Caregiver",
            "Resident",
            "Family",
        ],
    ),
    (
        "/admin/alarm-cloud",
        &[
            "SystemAdmin",
            "Admin",
            "Manager",
            "IT",
            "Nurse",
            "Caregiver",
            "Resident",
            "Family",
        ],
    ),
    ("/residents", &["Admin", "Manager", "Nurse", "Caregiver"]),
    (
        "/resident/:id/profile",
        &[
            "Admin",
            "Manager",
            "IT",
            "Nurse",
            "Caregiver",
            "Resident",
            "Family",
        ],
    ),
    (
        "/resident/:id/phi",
        &["Admin", "Manager", "Nurse", "Caregiver"],
    ),
    (
        "/resident/:id/contacts",
        &["Admin", "Manager", "Nurse", "Caregiver", "Resident", "Family"],
    ),
    (
        "/care-coordination/card-overview",
        &["Admin", "Manager", "IT", "Nurse"],
    ),
    ("/devices", &["Admin", "Manager", "IT"]),
    ("/admin/device-store", &["SystemAdmin"]),
    ("/units", &["Admin", "Manager", "IT"]),
    ("/admin/users", &["Admin", "Manager", "IT"]),
    ("/admin/roles", &["SystemAdmin", "Admin", "Manager", "IT"]),
    ("/admin/permissions", &["SystemAdmin"]),
    (
        "/admin/tags",
        &["SystemAdmin", "Admin", "Manager", "IT", "Nurse", "Caregiver"],
    ),
];

/// Route path → page display name.
const PAGE_NAMES: [(&str, &str); 16] = [
    ("/monitoring/overview", "Monitoring Overview"),
    ("/alarm/records", "Alarm Records"),
    ("/alarm/settings", "Alarm Settings"),
    ("/admin/alarm-cloud", "Alarm Cloud"),
    ("/residents", "Resident Management"),
    ("/resident/:id/profile", "Resident Profile Tab"),
    ("/resident/:id/phi", "Resident PHI Tab"),
    ("/resident/:id/contacts", "Resident Contacts Tab"),
    ("/care-coordination/card-overview", "Card Overview"),
    ("/devices", "Device Management"),
    ("/admin/device-store", "Device Store"),
    ("/units", "Unit Management"),
    ("/admin/users", "User Management"),
    ("/admin/roles", "Role Management"),
    ("/admin/permissions", "Permission Management"),
    ("/admin/tags", "Tag Management"),
];

/// Display name for a route path, the path itself when unnamed.
pub fn page_name(path: &str) -> &str {
    PAGE_NAMES
        .iter()
        .find(|(p, _)| *p == path)
        .map_or(path, |(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_name_falls_back_to_the_path() {
        assert_eq!(page_name("/admin/device-store"), "Device Store");
        assert_eq!(page_name("/not/in/table"), "/not/in/table");
    }

    #[test]
    fn every_reference_role_is_known() {
        for (path, roles) in REFERENCE {
            for role in roles {
                assert!(ALL_ROLES.contains(role), "unknown role {role} on {path}");
            }
        }
    }
}
