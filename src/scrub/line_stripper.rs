use std::path::{Path, PathBuf};

use regex::Regex;

use crate::scrub::edits;
use crate::scrub::walker;

/// Marker that gates which files the sweep touches: only sources that still
/// reference the test fixture package get rewritten.
pub const TEST_IMPORT_MARKER: &str = "@test";

/// Line-oriented removal of `if (useMock)` guard blocks.
///
/// Everything from the guard line up to (not including) the first
/// `return defHttp` line is dropped; the return line itself is kept. When no
/// such return follows, the rest of the file is dropped with the block —
/// accepted one-shot-tool risk, these sources always call through to
/// `defHttp` after the guard.
#[derive(Debug)]
pub struct LineStripper {
    guard_open: Regex,
    http_return: Regex,
}

impl LineStripper {
    /// Compile the guard and sentinel line patterns.
    pub fn new() -> Self {
        Self {
            guard_open: Regex::new(r"^\s*if\s*\(\s*useMock\s*\)")
                .expect("hard-coded pattern compiles"),
            http_return: Regex::new(r"^\s*return\s+defHttp")
                .expect("hard-coded pattern compiles"),
        }
    }

    /// Strip every guard block and collapse the blank lines left behind.
    pub fn strip(&self, content: &str) -> String {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
        let mut i = 0;

        while i < lines.len() {
            if self.guard_open.is_match(lines[i]) {
                // Skip to the real-API return, keeping it.
                i += 1;
                while i < lines.len() {
                    if self.http_return.is_match(lines[i]) {
                        kept.push(lines[i]);
                        i += 1;
                        break;
                    }
                    i += 1;
                }
            } else {
                kept.push(lines[i]);
                i += 1;
            }
        }

        edits::collapse_blank_lines(&kept.join("\n"))
    }
}

impl Default for LineStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip guard blocks from every `.ts` file under `root` that still carries
/// the [`TEST_IMPORT_MARKER`]; returns the rewritten paths relative to `root`.
pub fn sweep_tree(root: &Path) -> Result<Vec<PathBuf>, String> {
    let stripper = LineStripper::new();
    let mut cleaned = Vec::new();

    for path in walker::collect_sources(root, false)? {
        let content = walker::read_source(&path)?;
        if !content.contains(TEST_IMPORT_MARKER) {
            continue;
        }
        walker::write_source(&path, &stripper.strip(&content))?;
        cleaned.push(walker::relative_to(root, &path));
    }

    Ok(cleaned)
}
