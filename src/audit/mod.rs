/// Per-(role, resource) permission aggregation and display-code collapsing.
pub mod cell;
/// Grant records and their extraction from the permission seed file.
pub mod grant;
/// Embedded reference matrix, resource mapping, and fixed display orders.
pub mod matrix;
/// Markdown comparison table and differences list rendering.
pub mod report;
