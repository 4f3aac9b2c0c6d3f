use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collect `.ts` sources under `root`, sorted by path for deterministic output.
///
/// With `skip_tests` set, `.test.ts` files are left out of the batch.
pub fn collect_sources(root: &Path, skip_tests: bool) -> Result<Vec<PathBuf>, String> {
    let mut sources = Vec::new();

    for entry in WalkDir::new(root) {
        let entry =
            entry.map_err(|e| format!("Failed to walk {}: {e}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if !name.ends_with(".ts") {
            continue;
        }
        if skip_tests && name.ends_with(".test.ts") {
            continue;
        }
        sources.push(path);
    }

    sources.sort();
    Ok(sources)
}

/// Read a source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

/// Overwrite a source file with the transformed text.
pub fn write_source(path: &Path, content: &str) -> Result<(), String> {
    std::fs::write(path, content).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Path relative to the walked root, for report lines; falls back to the full path.
pub fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
