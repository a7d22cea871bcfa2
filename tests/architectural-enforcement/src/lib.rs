//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - No sleeping or blocking I/O in production code
//! - The core crate stays headless (no terminal crates)
//! - Rendering is pure (no session mutation, no I/O)
//!
//! The helpers here walk the workspace sources; the checks live in `tests/`.

use std::fs;
use std::path::{Path, PathBuf};

/// Root of the workspace (two levels above this crate)
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// Every `.rs` file under `dir` (relative to the workspace root)
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let path = workspace_root().join(dir);
    if !path.exists() {
        return Vec::new();
    }

    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Production lines of a file: 1-based line number and the code before any
/// `//` comment, stopping at the `#[cfg(test)]` module
pub fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };

    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(idx, line)| {
            let code = line.split("//").next().unwrap_or(line);
            (idx + 1, code.to_string())
        })
        .collect()
}

/// `path:line - code` for every production line under `dir` matching `pred`
pub fn find_violations<F>(dir: &str, pred: F) -> Vec<String>
where
    F: Fn(&Path, &str) -> bool,
{
    let mut violations = Vec::new();
    for file in rust_files(dir) {
        for (line_number, code) in production_lines(&file) {
            if pred(&file, &code) {
                violations.push(format!(
                    "{}:{} - {}",
                    file.display(),
                    line_number,
                    code.trim()
                ));
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_has_both_crates() {
        let root = workspace_root();
        assert!(root.join("core").join("src").exists());
        assert!(root.join("tui").join("src").exists());
    }

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let dir = std::env::temp_dir().join("movcli-arch-test");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("sample.rs");
        fs::write(
            &file,
            "fn a() {} // trailing\n\n#[cfg(test)]\nmod tests { fn b() {} }\n",
        )
        .unwrap();

        let lines = production_lines(&file);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (1, "fn a() {} ".to_string()));
    }
}
