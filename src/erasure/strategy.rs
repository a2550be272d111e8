/// Destructive write strategies
///
/// Methods are tried in a fixed, inspectable order and each failure carries
/// its reason, so the engine can fall back without guessing. The overwrite
/// method is best-effort by nature: on journaling or copy-on-write
/// filesystems and SSDs the old blocks may survive relocation, so this must
/// not be presented as forensic-grade destruction.
use rand::RngCore;
use std::fs;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use crate::config::Config;

const WRITE_CHUNK: usize = 8192;

/// One pass of the overwrite schedule
#[derive(Debug, Clone, Copy, PartialEq)]
enum PassPattern {
    Random,
    Fixed(u8),
}

/// Overwrite schedule: random, 0xFF, then a final all-zero pass
const OVERWRITE_PASSES: [PassPattern; 3] = [
    PassPattern::Random,
    PassPattern::Fixed(0xFF),
    PassPattern::Fixed(0x00),
];

/// Available destruction methods, strongest first
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EraseMethod {
    /// Multi-pass overwrite of the full content, then unlink
    OverwriteUnlink,
    /// Truncate to zero length; the directory entry and inode survive
    Truncate,
}

impl EraseMethod {
    pub fn name(&self) -> &'static str {
        match self {
            EraseMethod::OverwriteUnlink => "overwrite+unlink",
            EraseMethod::Truncate => "truncate",
        }
    }
}

const METHOD_ORDER: [EraseMethod; 2] = [EraseMethod::OverwriteUnlink, EraseMethod::Truncate];

/// Destroy a file's content using the best method that works
///
/// Only called for existing regular files of nonzero size. Tries each method
/// in order; returns the method that succeeded, or the collected failure
/// reasons if none did.
pub fn destroy_file(canonical: &Path, size: u64, config: &Config) -> Result<EraseMethod, String> {
    let mut failures: Vec<String> = Vec::new();

    for method in METHOD_ORDER {
        let result = match method {
            EraseMethod::OverwriteUnlink => overwrite_and_unlink(canonical, size),
            EraseMethod::Truncate => truncate_in_place(canonical),
        };

        match result {
            Ok(()) => {
                if config.verbose {
                    eprintln!("🔥 Destroyed {} ({})", canonical.display(), method.name());
                }
                return Ok(method);
            }
            Err(e) => {
                eprintln!(
                    "⚠️  Method {} failed on {}: {}",
                    method.name(),
                    canonical.display(),
                    e
                );
                failures.push(format!("{}: {}", method.name(), e));
            }
        }
    }

    Err(failures.join("; "))
}

/// Overwrite the full content in chunks, sync after each pass, then unlink
fn overwrite_and_unlink(path: &Path, size: u64) -> Result<(), String> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| format!("failed to open for overwrite: {}", e))?;

    let mut buffer = [0u8; WRITE_CHUNK];

    for pattern in OVERWRITE_PASSES {
        file.seek(SeekFrom::Start(0))
            .map_err(|e| format!("failed to seek: {}", e))?;

        let mut remaining = size as usize;
        while remaining > 0 {
            let chunk = remaining.min(WRITE_CHUNK);
            match pattern {
                PassPattern::Random => rand::rng().fill_bytes(&mut buffer[..chunk]),
                PassPattern::Fixed(byte) => buffer[..chunk].fill(byte),
            }
            file.write_all(&buffer[..chunk])
                .map_err(|e| format!("failed to write pass data: {}", e))?;
            remaining -= chunk;
        }

        file.sync_all()
            .map_err(|e| format!("failed to sync: {}", e))?;
    }

    drop(file);

    fs::remove_file(path).map_err(|e| format!("failed to unlink: {}", e))
}

/// Weaker fallback: destroy content but keep the entry
fn truncate_in_place(path: &Path) -> Result<(), String> {
    let file = fs::OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| format!("failed to open for truncate: {}", e))?;

    file.set_len(0)
        .map_err(|e| format!("failed to truncate: {}", e))?;

    file.sync_all().map_err(|e| format!("failed to sync: {}", e))
}
