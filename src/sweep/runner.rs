/// Run orchestration
///
/// Enumerates every candidate, feeds them through the erasure engine one at
/// a time, then performs the auxiliary system actions. Per-target failures
/// are tallied, never escalated; only the interrupt flag stops the loop.
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{Config, SweepProfile};
use crate::erasure;
use crate::sweep::summary::SweepSummary;
use crate::system;
use crate::targets;
use crate::targets::search::DEFAULT_SEARCH_ROOTS;

/// Execute a full sweep
pub fn run_sweep(config: &Config, profile: &SweepProfile, running: &Arc<AtomicBool>) -> SweepSummary {
    let candidates = collect_candidates(profile, config);

    eprintln!("🧹 Sweeping {} candidate paths...", candidates.len());

    let mut summary = SweepSummary::default();

    for candidate in &candidates {
        if !running.load(Ordering::SeqCst) {
            summary.interrupted = true;
            return summary;
        }

        let outcome = erasure::erase_path(candidate, config);
        summary.record(&outcome);
    }

    system::clear_temp_dirs(config);
    system::rotate_journal(config);
    system::drop_caches(config);

    summary
}

/// Gather all candidates in enumeration order, deduplicated
fn collect_candidates(profile: &SweepProfile, config: &Config) -> Vec<String> {
    let search_roots: Vec<PathBuf> = profile
        .search_roots
        .as_ref()
        .map(|roots| roots.iter().map(PathBuf::from).collect())
        .unwrap_or_else(|| DEFAULT_SEARCH_ROOTS.iter().map(PathBuf::from).collect());

    let mut candidates = targets::user_history_targets();
    candidates.extend(targets::system_log_targets());
    candidates.extend(targets::find_history_files(&search_roots, config));
    candidates.extend(profile.extra_targets.iter().cloned());

    dedupe(candidates)
}

/// First occurrence wins; enumeration order is preserved
fn dedupe(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_preserves_first_occurrence_order() {
        let input = vec![
            "/a".to_string(),
            "/b".to_string(),
            "/a".to_string(),
            "/c".to_string(),
            "/b".to_string(),
        ];
        assert_eq!(dedupe(input), vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_profile_targets_are_included() {
        let profile = SweepProfile {
            extra_targets: vec!["/srv/app/.repl_history".to_string()],
            search_roots: Some(vec![]),
            ..Default::default()
        };
        let candidates = collect_candidates(&profile, &Config::default());
        assert!(candidates.contains(&"/srv/app/.repl_history".to_string()));
    }
}
