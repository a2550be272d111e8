/// Privilege checks
use nix::unistd::Uid;

/// True when the effective UID is root
pub fn is_root() -> bool {
    Uid::effective().is_root()
}
