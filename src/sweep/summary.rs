/// Aggregated sweep results
use crate::erasure::{EraseOutcome, SkipReason};

/// Per-outcome tallies for one run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SweepSummary {
    pub erased: usize,
    pub backed_up: usize,
    pub reported: usize,
    pub skipped: usize,
    pub protected: usize,
    pub failed: usize,
    pub interrupted: bool,
}

impl SweepSummary {
    pub fn record(&mut self, outcome: &EraseOutcome) {
        match outcome {
            EraseOutcome::Erased => self.erased += 1,
            EraseOutcome::BackedUpAndErased(_) => {
                self.erased += 1;
                self.backed_up += 1;
            }
            EraseOutcome::DryRunReported => self.reported += 1,
            EraseOutcome::Skipped(SkipReason::Protected) => {
                self.skipped += 1;
                self.protected += 1;
            }
            EraseOutcome::Skipped(_) => self.skipped += 1,
            EraseOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn print(&self) {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        eprintln!();
        eprintln!("📊 Sweep summary ({})", now);
        eprintln!("   erased:    {} ({} backed up)", self.erased, self.backed_up);
        if self.reported > 0 {
            eprintln!("   dry-run:   {} targets reported", self.reported);
        }
        eprintln!("   skipped:   {} ({} protected)", self.skipped, self.protected);
        eprintln!("   failed:    {}", self.failed);
        if self.interrupted {
            eprintln!("   ⚠️  run was interrupted before completion");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_record_tallies_outcomes() {
        let mut summary = SweepSummary::default();

        summary.record(&EraseOutcome::Erased);
        summary.record(&EraseOutcome::BackedUpAndErased(PathBuf::from("/b/x.backup")));
        summary.record(&EraseOutcome::DryRunReported);
        summary.record(&EraseOutcome::Skipped(SkipReason::Missing));
        summary.record(&EraseOutcome::Skipped(SkipReason::Protected));
        summary.record(&EraseOutcome::Failed("io".to_string()));

        assert_eq!(summary.erased, 2);
        assert_eq!(summary.backed_up, 1);
        assert_eq!(summary.reported, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.protected, 1);
        assert_eq!(summary.failed, 1);
    }
}
