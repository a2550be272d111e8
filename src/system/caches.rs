/// Kernel cache drop
///
/// Flushes dirty pages with sync(2), then asks the kernel to drop the page
/// cache, dentries and inodes by writing 3 to /proc/sys/vm/drop_caches.
/// That file is a kernel control knob, written directly here - it is not an
/// erasure target, so the safety guard does not apply.
use std::fs;

use crate::config::Config;

const DROP_CACHES: &str = "/proc/sys/vm/drop_caches";

pub fn drop_caches(config: &Config) {
    if config.dry_run {
        eprintln!("🧪 [dry-run] Would sync and drop kernel caches");
        return;
    }

    eprintln!("🧠 Dropping in-memory filesystem caches...");

    unsafe {
        libc::sync();
    }

    match fs::write(DROP_CACHES, b"3\n") {
        Ok(()) => {
            if config.verbose {
                eprintln!("✅ Kernel caches dropped");
            }
        }
        Err(e) => {
            eprintln!("⚠️  Could not write {}: {}", DROP_CACHES, e);
        }
    }
}
