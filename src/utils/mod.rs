//! Utility modules for property checks.

pub mod sampling;

pub use sampling::random_vectors;

/// Seed used by the default property checks
pub const DEFAULT_SEED: u64 = 0x5EED_D07;
