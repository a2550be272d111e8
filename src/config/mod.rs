/// Configuration module - Run configuration and optional sweep profile
pub mod schema;
pub mod profile;

pub use schema::Config;
pub use profile::{SweepProfile, load_profile};
