use std::collections::{BTreeSet, HashMap};

use crate::audit::grant::{self, Grant};
use crate::audit::matrix;

/// A CRUD operation letter. The declaration order R, C, D, U is the letter
/// assignment sequence and, through `Ord`, the display order of every
/// derived code — `manage` renders as `RCDU`, never `CDRU`. Comparison
/// against the matrix sorts alphabetically instead; see [`normalize_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Op {
    /// `R` — read.
    Read,
    /// `C` — create.
    Create,
    /// `D` — delete.
    Delete,
    /// `U` — update.
    Update,
}

impl Op {
    /// The code letter for this operation.
    pub fn letter(self) -> char {
        match self {
            Op::Read => 'R',
            Op::Create => 'C',
            Op::Delete => 'D',
            Op::Update => 'U',
        }
    }
}

/// Aggregated grants for one (role, resource) pair: the operations seen and
/// the scopes they were granted under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionCell {
    ops: BTreeSet<Op>,
    scopes: BTreeSet<String>,
}

impl PermissionCell {
    /// Fold one grant into the cell. `manage` expands to all four
    /// operations; a permission type outside the seed vocabulary is
    /// malformed input and ignored.
    pub fn record(&mut self, permission: &str, scope: &str) {
        let ops: &[Op] = match permission {
            "read" => &[Op::Read],
            "create" => &[Op::Create],
            "update" => &[Op::Update],
            "delete" => &[Op::Delete],
            "manage" => &[Op::Read, Op::Create, Op::Delete, Op::Update],
            _ => return,
        };
        self.ops.extend(ops.iter().copied());
        self.scopes.insert(scope.to_string());
    }

    /// Collapse the cell into its display code.
    ///
    /// A lone `all` scope renders bare letters; any restricted or mixed
    /// scope combination carries the trailing `A` marker. Override precedence
    /// matters: read+update under restricted scopes wins over the
    /// read+create+update form.
    pub fn code(&self) -> String {
        if self.ops.is_empty() {
            return "-".to_string();
        }

        let letters: String = self.ops.iter().map(|op| op.letter()).collect();
        let has_all = self.scopes.contains("all");
        let has_restricted = self.scopes.iter().any(|scope| scope != "all");

        let perm_str = if has_all && !has_restricted {
            letters.clone()
        } else {
            format!("{letters}A")
        };

        let read = self.ops.contains(&Op::Read);
        let create = self.ops.contains(&Op::Create);
        let update = self.ops.contains(&Op::Update);

        if read && update && !has_all {
            if has_restricted {
                "RA/UA".to_string()
            } else {
                perm_str
            }
        } else if read && create && update && !has_all {
            "RCUA".to_string()
        } else {
            perm_str
        }
    }
}

/// Derive the role → resource → code table from the extracted grants.
///
/// Tuples for roles outside the allow-list are dropped silently; resource
/// identifiers are mapped to their matrix display names first, so unmapped
/// identifiers aggregate under their raw SQL name and never join the fixed
/// report rows.
pub fn derive_table(grants: &[Grant]) -> HashMap<String, HashMap<String, String>> {
    let mut cells: HashMap<String, HashMap<String, PermissionCell>> = HashMap::new();

    for g in grants {
        if !grant::is_allowed_role(&g.role) {
            continue;
        }
        let resource = matrix::display_resource(&g.resource).to_string();
        cells
            .entry(g.role.clone())
            .or_default()
            .entry(resource)
            .or_default()
            .record(&g.permission, &g.scope);
    }

    cells
        .into_iter()
        .map(|(role, resources)| {
            let codes = resources
                .into_iter()
                .map(|(resource, cell)| (resource, cell.code()))
                .collect();
            (role, codes)
        })
        .collect()
}

/// Normalize a code for comparison: drop the `(homecare)` annotation, then
/// sort slash-separated parts, or the letters themselves when there is no
/// slash. Display codes stay in R, C, D, U order; only the comparison is
/// order-blind.
pub fn normalize_code(code: &str) -> String {
    if code.is_empty() || code == "-" {
        return "-".to_string();
    }
    let stripped = code.replace("(homecare)", "");
    let stripped = stripped.trim();
    if stripped.contains('/') {
        let mut parts: Vec<&str> = stripped.split('/').collect();
        parts.sort_unstable();
        parts.join("/")
    } else {
        let mut letters: Vec<char> = stripped.chars().collect();
        letters.sort_unstable();
        letters.into_iter().collect()
    }
}
