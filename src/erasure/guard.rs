/// Protected-path classification
///
/// The sweep is driven by broad, pattern-based enumeration, so the guard is a
/// hard veto applied before any other check: nothing under a protected prefix
/// may be backed up, truncated, overwritten or removed, under any
/// configuration. Pure predicate over path text, no filesystem access.
use std::path::Path;

use crate::config::Config;

/// Prefixes that are never eligible for destruction.
/// /proc, /sys and /dev are virtual filesystems where truncation or removal
/// is meaningless at best and dangerous at worst.
const PROTECTED_PREFIXES: &[&str] = &["/proc", "/sys", "/dev"];

/// Classify a path as protected
///
/// The built-in set (filesystem root plus the virtual filesystem prefixes)
/// is unconditional; profile-supplied prefixes extend it but can never
/// shrink it.
pub fn is_protected(canonical: &Path, config: &Config) -> bool {
    if canonical == Path::new("/") {
        return true;
    }

    if PROTECTED_PREFIXES
        .iter()
        .any(|prefix| canonical.starts_with(prefix))
    {
        return true;
    }

    config
        .extra_protected
        .iter()
        .any(|prefix| canonical.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_root_is_protected() {
        let config = Config::default();
        assert!(is_protected(Path::new("/"), &config));
    }

    #[test]
    fn test_virtual_filesystems_are_protected() {
        let config = Config::default();
        assert!(is_protected(Path::new("/proc"), &config));
        assert!(is_protected(Path::new("/proc/1/status"), &config));
        assert!(is_protected(Path::new("/sys/kernel/debug"), &config));
        assert!(is_protected(Path::new("/dev/sda"), &config));
        assert!(is_protected(Path::new("/dev/null"), &config));
    }

    #[test]
    fn test_similar_names_are_not_protected() {
        let config = Config::default();
        assert!(!is_protected(Path::new("/procfs-dump"), &config));
        assert!(!is_protected(Path::new("/system"), &config));
        assert!(!is_protected(Path::new("/device-logs"), &config));
    }

    #[test]
    fn test_regular_targets_are_eligible() {
        let config = Config::default();
        assert!(!is_protected(Path::new("/home/alice/.bash_history"), &config));
        assert!(!is_protected(Path::new("/var/log/wtmp"), &config));
        assert!(!is_protected(Path::new("/tmp/session"), &config));
    }

    #[test]
    fn test_extra_protected_prefixes() {
        let config = Config {
            extra_protected: vec![PathBuf::from("/srv/keep")],
            ..Default::default()
        };
        assert!(is_protected(Path::new("/srv/keep/notes.log"), &config));
        assert!(!is_protected(Path::new("/srv/other"), &config));
    }
}
