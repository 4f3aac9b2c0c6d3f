/// Shared text edits applied after block removal (blank-line collapsing).
pub mod edits;
/// Brace-counting removal of `if (useMock) {...} else {...}`, keeping the else body.
pub mod else_promoter;
/// Guard removal over an explicit file list via a single dot-matches-newline pattern.
pub mod import_stripper;
/// Line-oriented removal of `if (useMock)` blocks up to the real-API return.
pub mod line_stripper;
/// Removal of the two multi-line mock residue shapes left by earlier passes.
pub mod pattern_stripper;
/// Detection heuristics for mock residue that earlier passes half-removed.
pub mod scanner;
/// Source tree walking and whole-file read/rewrite helpers.
pub mod walker;
