/// Run configuration for a sweep
use std::path::PathBuf;

/// Default directory for pre-erasure backups
pub const DEFAULT_BACKUP_DIR: &str = "/var/backups/histsweep";

/// Immutable configuration for one sweep run
///
/// Built once at startup from CLI flags (plus an optional profile file) and
/// passed by reference to every component. Never mutated afterward.
#[derive(Debug, Clone)]
pub struct Config {
    /// Report intended actions without mutating the filesystem
    pub dry_run: bool,

    /// Print per-target detail for silent outcomes (missing, empty, digests)
    pub verbose: bool,

    /// Copy each target's bytes to the backup directory before destruction
    pub backup_enabled: bool,

    /// Where backups land, flat layout, one file per erased source
    pub backup_dir: PathBuf,

    /// Additional protected path prefixes from the profile.
    /// The built-in protected set cannot be disabled by this.
    pub extra_protected: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dry_run: false,
            verbose: false,
            backup_enabled: false,
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            extra_protected: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.dry_run);
        assert!(!config.backup_enabled);
        assert_eq!(config.backup_dir, PathBuf::from(DEFAULT_BACKUP_DIR));
        assert!(config.extra_protected.is_empty());
    }
}
