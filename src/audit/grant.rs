use regex::Regex;

/// Roles the audit recognizes; tuples for any other role are dropped
/// silently rather than reported.
pub const ALLOWED_ROLES: [&str; 8] = [
    "SystemAdmin",
    "Admin",
    "Manager",
    "IT",
    "Nurse",
    "Caregiver",
    "Resident",
    "Family",
];

/// True when `role` is one of the eight roles the matrix tracks.
pub fn is_allowed_role(role: &str) -> bool {
    ALLOWED_ROLES.contains(&role)
}

/// One permission grant as seeded in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    /// Role the grant applies to.
    pub role: String,
    /// SQL resource identifier the grant covers.
    pub resource: String,
    /// Permission type: read, create, update, delete, or manage.
    pub permission: String,
    /// Scope qualifier, `all` or a restriction such as `assigned_only`.
    pub scope: String,
}

/// Extracts grant tuples from the seed file's INSERT value lists.
///
/// Only tuples of the literal shape
/// `(NULL, '<role>', '<resource>', '<perm_type>', '<scope>')` are
/// recognized; anything else in the file is simply not matched.
#[derive(Debug)]
pub struct GrantExtractor {
    tuple: Regex,
}

impl GrantExtractor {
    /// Compile the tuple pattern.
    pub fn new() -> Self {
        Self {
            tuple: Regex::new(r"\(NULL, '(\w+)', '(\w+)', '(\w+)', '(\w+)'\)")
                .expect("hard-coded pattern compiles"),
        }
    }

    /// All grant tuples in `sql`, in file order, unfiltered.
    pub fn extract(&self, sql: &str) -> Vec<Grant> {
        self.tuple
            .captures_iter(sql)
            .map(|caps| Grant {
                role: caps[1].to_string(),
                resource: caps[2].to_string(),
                permission: caps[3].to_string(),
                scope: caps[4].to_string(),
            })
            .collect()
    }
}

impl Default for GrantExtractor {
    fn default() -> Self {
        Self::new()
    }
}
