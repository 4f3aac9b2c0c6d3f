use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::scrub::walker;

/// A kind of mock residue left behind by an earlier, partially applied pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueKind {
    /// A mock console.log and return pair with no surrounding guard or function.
    OrphanedLogReturn,
    /// Closing brackets with nothing left to close before the real-API return.
    UnbalancedClose,
    /// A `useMock` flag followed too closely by the real-API return.
    MissingFunctionDecl,
}

impl fmt::Display for ResidueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResidueKind::OrphanedLogReturn => write!(f, "orphaned console.log/return statement"),
            ResidueKind::UnbalancedClose => write!(f, "unbalanced closing brackets"),
            ResidueKind::MissingFunctionDecl => write!(f, "possibly missing function declaration"),
        }
    }
}

/// A scanned file with at least one residue finding.
#[derive(Debug, Clone)]
pub struct ScanFinding {
    /// Path relative to the scanned root.
    pub path: PathBuf,
    /// Residue kinds detected in this file.
    pub residues: Vec<ResidueKind>,
}

/// Applies the three fixed residue heuristics to one file's content.
///
/// Detect-only: the scanner never rewrites anything. The patterns are tuned
/// to the exact formatting the mock scaffolding was generated with.
#[derive(Debug)]
pub struct SyntaxScanner {
    orphaned_log_return: Regex,
    unbalanced_close: Regex,
    missing_decl: Regex,
}

impl SyntaxScanner {
    /// Compile the three residue heuristics.
    pub fn new() -> Self {
        Self {
            orphaned_log_return: Regex::new(
                r"(?m)^\s*console\.log\(.*\n\s*params,\s*\n\s*\}\)\s*\n\s*return\s+\w+\.",
            )
            .expect("hard-coded pattern compiles"),
            unbalanced_close: Regex::new(r"(?m)^\s*\}\)\s*\n\s*\}\s*\n\s*return defHttp")
                .expect("hard-coded pattern compiles"),
            missing_decl: Regex::new(r"const useMock.*\n.*\n\s+return defHttp")
                .expect("hard-coded pattern compiles"),
        }
    }

    /// Residue kinds present in `content`, in heuristic order.
    pub fn scan(&self, content: &str) -> Vec<ResidueKind> {
        let mut residues = Vec::new();
        if self.orphaned_log_return.is_match(content) {
            residues.push(ResidueKind::OrphanedLogReturn);
        }
        if self.unbalanced_close.is_match(content) {
            residues.push(ResidueKind::UnbalancedClose);
        }
        if self.missing_decl.is_match(content) {
            residues.push(ResidueKind::MissingFunctionDecl);
        }
        residues
    }
}

impl Default for SyntaxScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan every non-test `.ts` file under `root`, returning only problem files.
pub fn scan_tree(root: &Path) -> Result<Vec<ScanFinding>, String> {
    let scanner = SyntaxScanner::new();
    let mut findings = Vec::new();

    for path in walker::collect_sources(root, true)? {
        let content = walker::read_source(&path)?;
        let residues = scanner.scan(&content);
        if !residues.is_empty() {
            findings.push(ScanFinding {
                path: walker::relative_to(root, &path),
                residues,
            });
        }
    }

    Ok(findings)
}
