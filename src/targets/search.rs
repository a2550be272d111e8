/// Pattern search for history-like files
///
/// Bounded recursive walk that collects files whose name contains "history"
/// (case-insensitive). Directory symlinks are never followed, so a link
/// cannot pull the walk into a protected or cyclic tree; individual matches
/// are still re-checked by the engine's guard before anything happens.
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::erasure::guard;

const MAX_DEPTH: usize = 8;

/// Default roots when the profile does not override them
pub const DEFAULT_SEARCH_ROOTS: &[&str] = &["/home", "/root", "/tmp", "/var/tmp"];

/// File-name match: any case variation of "history" as a substring
fn name_matches(name: &str) -> bool {
    name.to_lowercase().contains("history")
}

/// Search the given roots for history-like file names
pub fn find_history_files(roots: &[PathBuf], config: &Config) -> Vec<String> {
    let mut found = Vec::new();

    for root in roots {
        walk(root, 0, config, &mut found);
    }

    found
}

fn walk(dir: &Path, depth: usize, config: &Config, found: &mut Vec<String>) {
    if depth > MAX_DEPTH || guard::is_protected(dir, config) {
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // Unreadable directory: not our business, move on.
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };

        if file_type.is_dir() {
            walk(&path, depth + 1, config, found);
        } else if file_type.is_file() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name_matches(name) {
                    found.push(path.to_string_lossy().to_string());
                }
            }
        }
        // Symlinks are intentionally left alone here.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matching_is_case_insensitive() {
        assert!(name_matches(".bash_history"));
        assert!(name_matches("HISTORY.TXT"));
        assert!(name_matches("cmd_History.bak"));
        assert!(!name_matches("notes.txt"));
    }

    #[test]
    fn test_finds_nested_matches() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("shell_history"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let found = find_history_files(&[dir.path().to_path_buf()], &Config::default());
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("shell_history"));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_symlinks_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir(&real).unwrap();
        fs::write(real.join("secret_history"), b"x").unwrap();

        let scan_root = dir.path().join("scan");
        fs::create_dir(&scan_root).unwrap();
        std::os::unix::fs::symlink(&real, scan_root.join("link")).unwrap();

        let found = find_history_files(&[scan_root], &Config::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_missing_root_is_silent() {
        let roots = [PathBuf::from("/tmp/histsweep-test-no-such-root")];
        assert!(find_history_files(&roots, &Config::default()).is_empty());
    }
}
