/// Targets module - Enumeration of candidate paths for the sweep
pub mod history;
pub mod logs;
pub mod search;

pub use history::user_history_targets;
pub use logs::system_log_targets;
pub use search::find_history_files;
