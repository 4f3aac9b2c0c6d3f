//! One-shot maintenance passes for a frontend codebase: strip mock/test
//! scaffolding out of the API layer and Vue components, and audit the
//! permission seed data against the hand-maintained access-control tables.
#![warn(missing_docs)]

/// Permission seed extraction, per-cell aggregation, and matrix comparison.
pub mod audit;
/// Route permission configuration checks against the reference table.
pub mod routes;
/// Mock-scaffolding detection and removal passes over frontend sources.
pub mod scrub;
