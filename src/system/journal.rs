/// systemd journal rotation
///
/// Rotates the journal and vacuums everything older than one second, which
/// discards all rotated archives. Blocking, no timeout; failure to run
/// journalctl (not installed, not systemd) is a warning, never fatal.
use std::process::Command;

use crate::config::Config;

pub fn rotate_journal(config: &Config) {
    if config.dry_run {
        eprintln!("🧪 [dry-run] Would rotate and vacuum the systemd journal");
        return;
    }

    eprintln!("📜 Rotating systemd journal...");

    run_journalctl(&["--rotate"], config);
    run_journalctl(&["--vacuum-time=1s"], config);
}

fn run_journalctl(args: &[&str], config: &Config) {
    match Command::new("journalctl").args(args).output() {
        Ok(output) if output.status.success() => {
            if config.verbose {
                eprintln!("✅ journalctl {} succeeded", args.join(" "));
            }
        }
        Ok(output) => {
            eprintln!(
                "⚠️  journalctl {} exited with {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Err(e) => {
            eprintln!("⚠️  Failed to run journalctl {}: {}", args.join(" "), e);
        }
    }
}
