/// Erasure module - Policy-guarded secure file destruction
pub mod resolver;
pub mod guard;
pub mod backup;
pub mod strategy;
pub mod engine;

pub use engine::{EraseOutcome, SkipReason, erase_path};
pub use strategy::EraseMethod;
