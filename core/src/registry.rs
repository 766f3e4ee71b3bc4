//! registry.rs
//! Immutable name registries for algorithms and levels.
//!
//! Resolution is exact match after ASCII lowercasing, nothing fuzzier.
//! The tables are compile-time constants and never mutate.

use crate::types::{Algorithm, Level, OptionsError};

/// Canonical algorithm names, in code order.
pub const ALGORITHM_NAMES: [(&str, Algorithm); 3] = [
    ("identity", Algorithm::Identity),
    ("deflate", Algorithm::Deflate),
    ("gzip", Algorithm::Gzip),
];

/// Canonical level names, in code order.
pub const LEVEL_NAMES: [(&str, Level); 4] = [
    ("none", Level::None),
    ("low", Level::Low),
    ("medium", Level::Medium),
    ("high", Level::High),
];

/// Resolves a case-insensitive algorithm name to its canonical entry.
pub fn resolve_algorithm(name: &str) -> Result<Algorithm, OptionsError> {
    for (canonical, algorithm) in ALGORITHM_NAMES {
        if name.eq_ignore_ascii_case(canonical) {
            return Ok(algorithm);
        }
    }
    Err(OptionsError::InvalidAlgorithmName { name: name.to_owned() })
}

/// Resolves a case-insensitive level name to its canonical entry.
pub fn resolve_level(name: &str) -> Result<Level, OptionsError> {
    for (canonical, level) in LEVEL_NAMES {
        if name.eq_ignore_ascii_case(canonical) {
            return Ok(level);
        }
    }
    Err(OptionsError::InvalidLevelName { name: name.to_owned() })
}
