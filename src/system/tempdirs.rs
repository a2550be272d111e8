/// Temporary directory clearing
///
/// Removes the contents of the temp directories but keeps the directories
/// themselves (programs expect /tmp to exist). Every entry is handled
/// independently; a busy or unremovable entry is a warning and the loop
/// moves on.
use std::fs;
use std::path::Path;

use crate::config::Config;

const TEMP_DIRS: &[&str] = &["/tmp", "/var/tmp"];

pub fn clear_temp_dirs(config: &Config) {
    for dir in TEMP_DIRS {
        clear_dir_contents(Path::new(dir), config);
    }
}

/// Remove every child of `dir`, leaving `dir` in place
fn clear_dir_contents(dir: &Path, config: &Config) {
    if config.dry_run {
        eprintln!("🧪 [dry-run] Would clear contents of {}", dir.display());
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("⚠️  Cannot read {}: {}", dir.display(), e);
            return;
        }
    };

    let mut removed = 0usize;

    for entry in entries.flatten() {
        let path = entry.path();

        // Symlinks must be unlinked, not followed.
        let is_dir = entry
            .file_type()
            .map(|t| t.is_dir())
            .unwrap_or(false);

        let result = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };

        match result {
            Ok(()) => removed += 1,
            Err(e) => eprintln!("⚠️  Could not remove {}: {}", path.display(), e),
        }
    }

    if config.verbose {
        eprintln!("🗑️  Cleared {} entries from {}", removed, dir.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clears_contents_but_keeps_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scratch"), b"x").unwrap();
        fs::create_dir(dir.path().join("session")).unwrap();
        fs::write(dir.path().join("session/file"), b"x").unwrap();

        clear_dir_contents(dir.path(), &Config::default());

        assert!(dir.path().exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_dry_run_removes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scratch"), b"x").unwrap();

        let config = Config {
            dry_run: true,
            ..Default::default()
        };
        clear_dir_contents(dir.path(), &config);

        assert!(dir.path().join("scratch").exists());
    }

    #[test]
    fn test_missing_directory_is_non_fatal() {
        clear_dir_contents(Path::new("/tmp/histsweep-test-no-such-dir"), &Config::default());
    }
}
