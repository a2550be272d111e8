/// Erasure engine
///
/// One call per candidate path: validate -> guard -> backup -> destroy.
/// The engine is total: no input can make it panic or abort the sweep; the
/// worst possible outcome is `Failed` with a warning on stderr. Every target
/// is independent, so a sweep can never be left half-crashed.
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::erasure::backup;
use crate::erasure::guard;
use crate::erasure::resolver;
use crate::erasure::strategy;

/// Why a target was skipped without side effects
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Empty candidate string
    EmptyInput,
    /// Broken symlink or stat failure; nothing safe to do
    Unresolvable,
    /// Vetoed by the safety guard
    Protected,
    /// Path does not exist (normal on repeat runs)
    Missing,
    /// Zero-size file, nothing to destroy
    EmptyFile,
}

impl SkipReason {
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::EmptyInput => "empty input",
            SkipReason::Unresolvable => "unresolvable",
            SkipReason::Protected => "protected path",
            SkipReason::Missing => "missing",
            SkipReason::EmptyFile => "empty",
        }
    }
}

/// Terminal state for one candidate path
#[derive(Debug, Clone, PartialEq)]
pub enum EraseOutcome {
    Skipped(SkipReason),
    DryRunReported,
    BackedUpAndErased(PathBuf),
    Erased,
    Failed(String),
}

/// Process one candidate path to a terminal outcome
pub fn erase_path(candidate: &str, config: &Config) -> EraseOutcome {
    if candidate.is_empty() {
        return EraseOutcome::Skipped(SkipReason::EmptyInput);
    }

    // Guard runs lexically before any stat, so virtual paths matched by a
    // broad enumeration are vetoed even when they cannot be inspected.
    let abs = resolver::absolutize(candidate);
    if guard::is_protected(&abs, config) {
        eprintln!("🛡️  Skipping protected path: {}", abs.display());
        return EraseOutcome::Skipped(SkipReason::Protected);
    }

    let target = match resolver::resolve(candidate) {
        Some(target) => target,
        None => {
            let reason = SkipReason::Unresolvable;
            if config.verbose {
                eprintln!("ℹ️  Skipping {} ({})", candidate, reason.label());
            }
            return EraseOutcome::Skipped(reason);
        }
    };

    // Second guard pass on the canonical path catches symlinks that escape
    // into a protected tree.
    if guard::is_protected(&target.canonical, config) {
        eprintln!("🛡️  Skipping protected path: {}", target.canonical.display());
        return EraseOutcome::Skipped(SkipReason::Protected);
    }

    if !target.exists {
        let reason = SkipReason::Missing;
        if config.verbose {
            eprintln!("ℹ️  Skipping {} ({})", target.canonical.display(), reason.label());
        }
        return EraseOutcome::Skipped(reason);
    }

    if target.is_dir {
        return erase_directory(&target, config);
    }

    if target.size == 0 {
        let reason = SkipReason::EmptyFile;
        if config.verbose {
            eprintln!("ℹ️  Skipping {} ({})", target.canonical.display(), reason.label());
        }
        return EraseOutcome::Skipped(reason);
    }

    if config.dry_run {
        eprintln!(
            "🧪 [dry-run] Would erase {} ({} bytes)",
            target.canonical.display(),
            target.size
        );
        return EraseOutcome::DryRunReported;
    }

    // Best-effort: a failed backup is warned about and never blocks erasure.
    let backup_path = if config.backup_enabled {
        backup::backup_file(&target.canonical, config)
    } else {
        None
    };

    match strategy::destroy_file(&target.canonical, target.size, config) {
        Ok(_method) => match backup_path {
            Some(path) => EraseOutcome::BackedUpAndErased(path),
            None => EraseOutcome::Erased,
        },
        Err(reason) => {
            eprintln!("⚠️  Could not erase {}: {}", target.canonical.display(), reason);
            EraseOutcome::Failed(reason)
        }
    }
}

/// Directory targets are structural, not content: recursive removal with no
/// backup and no overwrite, honoring dry-run and the guard identically.
fn erase_directory(target: &resolver::ResolvedTarget, config: &Config) -> EraseOutcome {
    if config.dry_run {
        eprintln!(
            "🧪 [dry-run] Would remove directory {}",
            target.canonical.display()
        );
        return EraseOutcome::DryRunReported;
    }

    match fs::remove_dir_all(&target.canonical) {
        Ok(()) => {
            if config.verbose {
                eprintln!("🗑️  Removed directory {}", target.canonical.display());
            }
            EraseOutcome::Erased
        }
        Err(e) => {
            let reason = format!("failed to remove directory: {}", e);
            eprintln!("⚠️  Could not erase {}: {}", target.canonical.display(), reason);
            EraseOutcome::Failed(reason)
        }
    }
}
