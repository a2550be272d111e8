/// Pre-erasure backup writer
///
/// Best-effort by contract: a failed backup is a warning, never a reason to
/// skip the erase step. Backups land flat in the configured directory, one
/// file per source, named after the full source path.
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;

const COPY_CHUNK: usize = 8192;

/// Backup file name for a source path: slashes become underscores, flat layout
/// (`/home/alice/.bash_history` -> `_home_alice_.bash_history.backup`)
pub fn backup_file_name(source: &Path) -> String {
    let mut name = source.to_string_lossy().replace('/', "_");
    name.push_str(".backup");
    name
}

/// Copy a target's bytes into the backup directory
///
/// Returns the backup path on success, `None` on any failure (already
/// reported as a warning). Only called for existing files of nonzero size.
pub fn backup_file(canonical: &Path, config: &Config) -> Option<PathBuf> {
    if let Err(e) = fs::create_dir_all(&config.backup_dir) {
        eprintln!(
            "⚠️  Cannot create backup directory {}: {}",
            config.backup_dir.display(),
            e
        );
        return None;
    }

    let dest = config.backup_dir.join(backup_file_name(canonical));

    match copy_with_digest(canonical, &dest) {
        Ok(digest) => {
            if config.verbose {
                eprintln!(
                    "💾 Backed up {} -> {} (sha256 {})",
                    canonical.display(),
                    dest.display(),
                    hex::encode(digest)
                );
            }
            Some(dest)
        }
        Err(e) => {
            eprintln!("⚠️  Backup of {} failed: {}", canonical.display(), e);
            // Do not leave a half-written copy behind.
            let _ = fs::remove_file(&dest);
            None
        }
    }
}

/// Chunked copy that hashes the stream as it goes
fn copy_with_digest(source: &Path, dest: &Path) -> Result<[u8; 32], String> {
    let mut reader = fs::File::open(source)
        .map_err(|e| format!("failed to open source: {}", e))?;
    let mut writer = fs::File::create(dest)
        .map_err(|e| format!("failed to create backup file: {}", e))?;

    let mut hasher = Sha256::new();
    let mut buffer = [0u8; COPY_CHUNK];

    loop {
        let read = reader
            .read(&mut buffer)
            .map_err(|e| format!("read error: {}", e))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
        writer
            .write_all(&buffer[..read])
            .map_err(|e| format!("write error: {}", e))?;
    }

    writer
        .sync_all()
        .map_err(|e| format!("sync error: {}", e))?;

    Ok(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_file_name_flattens_path() {
        assert_eq!(
            backup_file_name(Path::new("/home/alice/.bash_history")),
            "_home_alice_.bash_history.backup"
        );
    }

    #[test]
    fn test_backup_preserves_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("history");
        fs::write(&source, b"ls -la\ncat /etc/passwd\n").unwrap();

        let config = Config {
            backup_dir: dir.path().join("backups"),
            backup_enabled: true,
            ..Default::default()
        };

        let dest = backup_file(&source, &config).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), fs::read(&source).unwrap());
    }

    #[test]
    fn test_backup_creates_directory_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("data");
        fs::write(&source, b"x").unwrap();

        let config = Config {
            backup_dir: dir.path().join("a/b/c"),
            ..Default::default()
        };

        let dest = backup_file(&source, &config).unwrap();
        assert!(dest.starts_with(dir.path().join("a/b/c")));
        assert!(dest.exists());
    }

    #[test]
    fn test_missing_source_is_non_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            backup_dir: dir.path().join("backups"),
            ..Default::default()
        };

        assert!(backup_file(&dir.path().join("absent"), &config).is_none());
    }
}
