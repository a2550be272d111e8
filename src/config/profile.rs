/// Sweep profile loader
///
/// A profile is an optional JSON file passed via --profile that extends the
/// built-in target lists. Operators use it to add site-specific history files
/// or to fence off directories the sweep must never touch.
use serde::{Deserialize, Serialize};
use std::fs;

/// Optional per-site extension of the sweep
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SweepProfile {
    /// Extra candidate paths, processed like any enumerated target
    #[serde(default)]
    pub extra_targets: Vec<String>,

    /// Extra protected path prefixes (absolute)
    #[serde(default)]
    pub extra_protected: Vec<String>,

    /// Override the roots scanned by the history-name search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_roots: Option<Vec<String>>,

    /// Override the backup directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_dir: Option<String>,
}

impl SweepProfile {
    /// Validate profile contents
    pub fn validate(&self) -> Result<(), String> {
        for prefix in &self.extra_protected {
            if !prefix.starts_with('/') {
                return Err(format!("protected prefix must be absolute: {}", prefix));
            }
        }

        if let Some(roots) = &self.search_roots {
            for root in roots {
                if !root.starts_with('/') {
                    return Err(format!("search root must be absolute: {}", root));
                }
            }
        }

        if let Some(dir) = &self.backup_dir {
            if dir.is_empty() {
                return Err("backup_dir cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

/// Load and validate a profile from a JSON file
pub fn load_profile(path: &str) -> Result<SweepProfile, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read profile {}: {}", path, e))?;

    let profile: SweepProfile = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse profile {}: {}", path, e))?;

    profile.validate()?;

    Ok(profile)
}
