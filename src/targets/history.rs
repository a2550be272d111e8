/// Per-user history artifacts
///
/// Well-known history files written by shells, REPLs, editors and database
/// clients, enumerated for every home directory. Nonexistent entries are
/// fine: the engine treats absence as a silent skip.
use std::fs;
use std::path::{Path, PathBuf};

/// History dotfiles relative to a home directory
const HISTORY_FILES: &[&str] = &[
    ".bash_history",
    ".zsh_history",
    ".sh_history",
    ".ksh_history",
    ".history",
    ".python_history",
    ".node_repl_history",
    ".psql_history",
    ".mysql_history",
    ".sqlite_history",
    ".rediscli_history",
    ".dbshell",
    ".lesshst",
    ".viminfo",
    ".wget-hsts",
    ".php_history",
    ".local/share/fish/fish_history",
];

/// Session-artifact directories, removed recursively by the engine
const SESSION_DIRS: &[&str] = &[".bash_sessions", ".zsh_sessions"];

/// Candidate paths for one home directory
pub fn history_targets_for_home(home: &Path) -> Vec<String> {
    HISTORY_FILES
        .iter()
        .chain(SESSION_DIRS.iter())
        .map(|name| home.join(name).to_string_lossy().to_string())
        .collect()
}

/// All home directories: /root plus every entry under /home
pub fn home_directories() -> Vec<PathBuf> {
    let mut homes = vec![PathBuf::from("/root")];

    if let Ok(entries) = fs::read_dir("/home") {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                homes.push(path);
            }
        }
    }

    homes
}

/// Candidate paths across all users
pub fn user_history_targets() -> Vec<String> {
    home_directories()
        .iter()
        .flat_map(|home| history_targets_for_home(home))
        .collect()
}
