use std::path::{Path, PathBuf};

use regex::Regex;

use crate::scrub::edits;
use crate::scrub::walker;

/// What happened to one file in an explicit-list strip run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripStatus {
    /// The file was not found; reported and skipped.
    Missing,
    /// The file exists but contained no guard blocks.
    Clean,
    /// The file was rewritten, with this many guard blocks removed.
    Fixed(usize),
}

/// Per-file outcome of [`strip_files`].
#[derive(Debug, Clone)]
pub struct StripOutcome {
    /// The file as it was listed on the command line.
    pub path: PathBuf,
    /// What happened to it.
    pub status: StripStatus,
}

/// Removes `if (useMock)` guard blocks that import the test fixture package.
///
/// The pattern is brace-depth-insensitive: it matches lazily from the guard
/// open through the first `} } )` closing run after the `@test/index` import,
/// which is the shape the affected sources were left in. Nested braces beyond
/// that shape are not tracked.
#[derive(Debug)]
pub struct ImportStripper {
    guard_block: Regex,
}

impl ImportStripper {
    /// Compile the guard block pattern.
    pub fn new() -> Self {
        Self {
            guard_block: Regex::new(
                r#"(?s)if\s*\(\s*useMock\s*\)\s*\{.*?import\s*\(\s*['"]@test/index['"]\s*\).*?\}\s*\}\s*\)"#,
            )
            .expect("hard-coded pattern compiles"),
        }
    }

    /// Delete every guard block; returns the new text and the removed count.
    ///
    /// Blank lines are only collapsed when something was removed, so a clean
    /// file round-trips byte-for-byte.
    pub fn strip(&self, content: &str) -> (String, usize) {
        let blocks = self.guard_block.find_iter(content).count();
        if blocks == 0 {
            return (content.to_string(), 0);
        }
        let stripped = self.guard_block.replace_all(content, "");
        (edits::collapse_blank_lines(&stripped), blocks)
    }
}

impl Default for ImportStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip guard blocks from an explicit file list, resolved against `root`.
///
/// A listed file that does not exist is reported as [`StripStatus::Missing`]
/// and skipped; it does not abort the batch.
pub fn strip_files(root: &Path, files: &[PathBuf]) -> Result<Vec<StripOutcome>, String> {
    let stripper = ImportStripper::new();
    let mut outcomes = Vec::with_capacity(files.len());

    for file in files {
        let full_path = root.join(file);
        if !full_path.exists() {
            outcomes.push(StripOutcome {
                path: file.clone(),
                status: StripStatus::Missing,
            });
            continue;
        }

        let content = walker::read_source(&full_path)?;
        let (stripped, blocks) = stripper.strip(&content);
        let status = if blocks > 0 {
            walker::write_source(&full_path, &stripped)?;
            StripStatus::Fixed(blocks)
        } else {
            StripStatus::Clean
        };
        outcomes.push(StripOutcome {
            path: file.clone(),
            status,
        });
    }

    Ok(outcomes)
}
