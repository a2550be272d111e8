/// Candidate path resolution
///
/// Turns an untrusted candidate string into a canonical, symlink-free target
/// description. Resolution never errors out of the engine: a path we cannot
/// make sense of (broken symlink, stat denied) is simply unresolvable.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Everything the engine needs to know about one candidate
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    /// Absolute, symlink-resolved path (best-effort absolutized for missing entries)
    pub canonical: PathBuf,
    pub exists: bool,
    pub size: u64,
    pub is_dir: bool,
}

/// Absolutize a candidate against the current directory without touching the filesystem
pub fn absolutize(candidate: &str) -> PathBuf {
    let path = Path::new(candidate);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Resolve a candidate path
///
/// Returns `None` when the path is unresolvable: a symlink whose target
/// cannot be followed, or a stat failure other than plain absence.
/// A nonexistent path resolves to `exists: false` - absence is a normal
/// outcome, not an error.
pub fn resolve(candidate: &str) -> Option<ResolvedTarget> {
    let abs = absolutize(candidate);

    match fs::symlink_metadata(&abs) {
        Err(e) if e.kind() == ErrorKind::NotFound => Some(ResolvedTarget {
            canonical: abs,
            exists: false,
            size: 0,
            is_dir: false,
        }),
        Err(_) => None,
        Ok(_) => {
            // Entry exists; resolve symlinks and stat through the link.
            let canonical = fs::canonicalize(&abs).ok()?;
            let meta = fs::metadata(&canonical).ok()?;
            Some(ResolvedTarget {
                canonical,
                exists: true,
                size: meta.len(),
                is_dir: meta.is_dir(),
            })
        }
    }
}
