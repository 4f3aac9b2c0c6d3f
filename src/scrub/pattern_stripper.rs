use std::path::{Path, PathBuf};

use regex::Regex;

use crate::scrub::walker;

/// Removes the two multi-line mock residue shapes that survive a partially
/// applied guard removal: an orphaned mock-log plus return, and an orphaned
/// mock-log plus then/catch chain. Both shapes are bracketed by the literal
/// mock comments the scaffolding generator emitted, so each match spans from
/// the "mock enabled" comment through the "Production" comment line.
#[derive(Debug)]
pub struct PatternStripper {
    log_return: Regex,
    then_catch: Regex,
}

impl PatternStripper {
    /// Compile the two residue shapes.
    pub fn new() -> Self {
        Self {
            log_return: Regex::new(concat!(
                r"  // In development with mock enabled, return mock data directly\s*\n",
                r"\s*console\.log\([^)]+\),\s*\{\s*\n",
                r"(?:\s+\w+,\s*\n)*",
                r"\s*\}\)\s*\n",
                r"\s*return\s+\w+\.\w+\([^)]*\)\s*\n",
                r"\s*\}\)\s*\n",
                r"\s*\}\s*\n",
                r"\s*\n",
                r"\s*// Production: Call real API\s*\n",
            ))
            .expect("hard-coded pattern compiles"),
            then_catch: Regex::new(concat!(
                r"  // In development with mock enabled, return mock data directly\s*\n",
                r"\s*console\.log\([^)]+,\s*\{[^}]+\}\)\s*\n",
                r"\s*return\s+\w+\.\w+\([^)]*\)\.then\([^}]+\{[^}]+\}\s*\)\.catch\([^}]+\{[^}]+\}\s*\)\s*\n",
                r"\s*\}\)\s*\n",
                r"\s*\}\s*\n",
                r"\s*\n",
                r"\s*// Production: Call real API\s*\n",
            ))
            .expect("hard-coded pattern compiles"),
        }
    }

    /// Delete every occurrence of both residue shapes.
    pub fn strip(&self, content: &str) -> String {
        let content = self.log_return.replace_all(content, "");
        self.then_catch.replace_all(&content, "").into_owned()
    }
}

impl Default for PatternStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip residue shapes from every non-test `.ts` file under `root`,
/// rewriting only files that changed; returns the rewritten paths relative
/// to `root`.
pub fn patch_tree(root: &Path) -> Result<Vec<PathBuf>, String> {
    let stripper = PatternStripper::new();
    let mut fixed = Vec::new();

    for path in walker::collect_sources(root, true)? {
        let content = walker::read_source(&path)?;
        let stripped = stripper.strip(&content);
        if stripped != content {
            walker::write_source(&path, &stripped)?;
            fixed.push(walker::relative_to(root, &path));
        }
    }

    Ok(fixed)
}
