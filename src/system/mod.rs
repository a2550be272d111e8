/// System module - Auxiliary maintenance actions beyond per-file erasure
pub mod caches;
pub mod journal;
pub mod tempdirs;

pub use caches::drop_caches;
pub use journal::rotate_journal;
pub use tempdirs::clear_temp_dirs;
