//! histsweep - Privacy sweep for multi-user Linux systems
//!
//! Locates and destroys history and log artifacts: shell and REPL history
//! files, application histories, system logs, temp directories, and
//! in-memory filesystem caches.
//!
//! Destruction is best-effort overwrite, not forensic-grade erasure: on
//! journaling and copy-on-write filesystems and on SSDs, overwritten blocks
//! may survive relocation. Do not rely on this tool to defeat forensic
//! recovery on such media.

mod cli;
mod config;
mod erasure;
mod sweep;
mod system;
mod targets;
mod utils;

use clap::Parser;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use config::{Config, SweepProfile};

fn main() {
    let args = cli::Args::parse();

    // The sweep reaches into every home directory and /var/log; without
    // root the run would be a misleading partial pass.
    if !utils::is_root() {
        eprintln!("❌ histsweep must run as root");
        exit(1);
    }

    let profile = match &args.profile {
        Some(path) => match config::load_profile(path) {
            Ok(profile) => profile,
            Err(e) => {
                eprintln!("❌ {}", e);
                exit(1);
            }
        },
        None => SweepProfile::default(),
    };

    let config = build_config(&args, &profile);

    if !args.yes && !config.dry_run {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("This will irreversibly destroy history and log files. Continue?")
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmed {
            eprintln!("Aborted, nothing was touched.");
            exit(0);
        }
    }

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    if let Err(e) = ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    }) {
        eprintln!("⚠️  Could not install interrupt handler: {}", e);
    }

    let summary = sweep::run_sweep(&config, &profile, &running);
    summary.print();

    if summary.interrupted {
        eprintln!("🛑 Interrupted - sweep stopped at the last completed target");
        exit(130);
    }

    // Per-target failures are summarized above, never escalated to a
    // nonzero exit.
    exit(0);
}

/// Merge CLI flags and profile into the immutable run configuration.
/// CLI beats profile, profile beats defaults.
fn build_config(args: &cli::Args, profile: &SweepProfile) -> Config {
    let backup_dir = args
        .backup_dir
        .clone()
        .or_else(|| profile.backup_dir.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::schema::DEFAULT_BACKUP_DIR));

    Config {
        dry_run: args.dry_run,
        verbose: args.verbose,
        backup_enabled: args.backup,
        backup_dir,
        extra_protected: profile.extra_protected.iter().map(PathBuf::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_profile_backup_dir() {
        let args = cli::Args::parse_from(["histsweep", "--backup", "--backup-dir", "/mnt/b"]);
        let profile = SweepProfile {
            backup_dir: Some("/srv/backups".to_string()),
            ..Default::default()
        };

        let config = build_config(&args, &profile);
        assert_eq!(config.backup_dir, PathBuf::from("/mnt/b"));
        assert!(config.backup_enabled);
    }

    #[test]
    fn test_profile_backup_dir_used_when_cli_silent() {
        let args = cli::Args::parse_from(["histsweep"]);
        let profile = SweepProfile {
            backup_dir: Some("/srv/backups".to_string()),
            extra_protected: vec!["/srv/keep".to_string()],
            ..Default::default()
        };

        let config = build_config(&args, &profile);
        assert_eq!(config.backup_dir, PathBuf::from("/srv/backups"));
        assert_eq!(config.extra_protected, vec![PathBuf::from("/srv/keep")]);
    }
}
