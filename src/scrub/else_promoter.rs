use std::path::Path;

use regex::Regex;

use crate::scrub::edits;
use crate::scrub::walker;

/// Removes `if (useMock) {...} else {...}` constructs, promoting the else
/// body into the guard's place.
///
/// Block boundaries are found by counting `{`/`}` per line, starting at depth
/// one on the line after the guard open; the guard open and else open are
/// expected on their own lines with a single brace each. The else body is
/// re-indented left by the else line's indentation. A guard with no else
/// branch is dropped whole.
#[derive(Debug)]
pub struct ElsePromoter {
    guard_open: Regex,
    else_open: Regex,
}

impl ElsePromoter {
    /// Compile the guard and else line patterns.
    pub fn new() -> Self {
        Self {
            guard_open: Regex::new(r"^\s*if\s*\(\s*useMock\s*\)\s*\{")
                .expect("hard-coded pattern compiles"),
            else_open: Regex::new(r"^\s*else\s*\{").expect("hard-coded pattern compiles"),
        }
    }

    /// Promote every else body and drop its guard block.
    pub fn promote(&self, content: &str) -> String {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut result: Vec<&str> = Vec::with_capacity(lines.len());
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            if self.guard_open.is_match(line) {
                // Walk past the guard body.
                let mut depth: i32 = 1;
                i += 1;
                while i < lines.len() && depth > 0 {
                    depth += brace_delta(lines[i]);
                    i += 1;
                }

                if i < lines.len() && self.else_open.is_match(lines[i]) {
                    let indent = lines[i].len() - lines[i].trim_start().len();
                    i += 1;

                    // Copy the else body, re-indented, up to its closing line.
                    let mut depth: i32 = 1;
                    while i < lines.len() && depth > 0 {
                        let current = lines[i];
                        if current.trim() == "}" && depth == 1 {
                            i += 1;
                            break;
                        }
                        depth += brace_delta(current);
                        result.push(outdent(current, indent));
                        i += 1;
                    }
                }
                continue;
            }

            result.push(line);
            i += 1;
        }

        result.join("\n")
    }
}

impl Default for ElsePromoter {
    fn default() -> Self {
        Self::new()
    }
}

fn brace_delta(line: &str) -> i32 {
    let opens = line.matches('{').count() as i32;
    let closes = line.matches('}').count() as i32;
    opens - closes
}

/// Drop `indent` leading spaces; lines indented differently pass through.
fn outdent(line: &str, indent: usize) -> &str {
    let bytes = line.as_bytes();
    if bytes.len() >= indent && bytes[..indent].iter().all(|&b| b == b' ') {
        &line[indent..]
    } else {
        line
    }
}

/// Promote else bodies in one file, collapse blank lines, and rewrite it.
pub fn promote_file(path: &Path) -> Result<(), String> {
    let promoter = ElsePromoter::new();
    let content = walker::read_source(path)?;
    let promoted = edits::collapse_blank_lines(&promoter.promote(&content));
    walker::write_source(path, &promoted)
}
