//! options.rs
//! Mutable compression configuration value object.
//!
//! Notes:
//! - Plain data, no native handle. Duplicating by value is always safe, so a
//!   process holding one may fork without cross-process aliasing hazards.
//! - Identity is the wire baseline: its bit is set at construction and no
//!   operation can clear it.
//! - Every mutating call validates all inputs before touching state; a
//!   failing call leaves the config exactly as it was.

use std::fmt;
use bitflags::bitflags;

use crate::constants::ALGORITHM_COUNT;
use crate::registry::{resolve_algorithm, resolve_level, ALGORITHM_NAMES};
use crate::types::{Algorithm, Level, OptionsError};

bitflags! {
    /// Bitmask over algorithm bit positions (`1 << code`).
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct AlgorithmSet: u32 {
        const IDENTITY = 1 << 0;
        const DEFLATE = 1 << 1;
        const GZIP = 1 << 2;
    }
}

impl From<Algorithm> for AlgorithmSet {
    fn from(algorithm: Algorithm) -> Self {
        AlgorithmSet::from_bits_truncate(algorithm.bit())
    }
}

/// Compression configuration negotiated before a call is established.
///
/// Starts with every algorithm enabled and both defaults unset ("let the
/// transport choose"). Export via [`crate::channel_args::channel_args`] is a
/// pure read; the config stays mutable afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CompressionOptions {
    enabled: AlgorithmSet,
    default_algorithm: Option<Algorithm>,
    default_level: Option<Level>,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            enabled: AlgorithmSet::all(),
            default_algorithm: None,
            default_level: None,
        }
    }
}

impl CompressionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables every named algorithm. Resolves all names first; an unknown
    /// name fails the whole call without partial application. Zero names is
    /// a no-op.
    pub fn enable_algorithms<I, S>(&mut self, names: I) -> Result<(), OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bits = Self::resolve_all(names)?;
        self.enabled |= bits;
        Ok(())
    }

    /// Disables every named algorithm, except identity which is silently
    /// ignored. Same atomic validation as [`Self::enable_algorithms`].
    pub fn disable_algorithms<I, S>(&mut self, names: I) -> Result<(), OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bits = Self::resolve_all(names)?;
        self.enabled &= !(bits - AlgorithmSet::IDENTITY);
        Ok(())
    }

    /// Enables a single algorithm by typed value.
    pub fn enable_algorithm(&mut self, algorithm: Algorithm) {
        self.enabled |= AlgorithmSet::from(algorithm);
    }

    /// Disables a single algorithm by typed value; identity is ignored.
    pub fn disable_algorithm(&mut self, algorithm: Algorithm) {
        if algorithm != Algorithm::Identity {
            self.enabled &= !AlgorithmSet::from(algorithm);
        }
    }

    /// Sets the default algorithm by name. Fails if the name is unknown or
    /// the resolved algorithm is currently disabled.
    pub fn set_default_algorithm(&mut self, name: &str) -> Result<(), OptionsError> {
        let algorithm = resolve_algorithm(name)?;
        if !self.is_algorithm_enabled(algorithm) {
            return Err(OptionsError::DefaultAlgorithmDisabled { algorithm });
        }
        self.default_algorithm = Some(algorithm);
        Ok(())
    }

    /// Sets the default level by name. Levels have no enabled/disabled
    /// concept, so only the name is validated.
    pub fn set_default_level(&mut self, name: &str) -> Result<(), OptionsError> {
        self.default_level = Some(resolve_level(name)?);
        Ok(())
    }

    pub fn is_algorithm_enabled(&self, algorithm: Algorithm) -> bool {
        self.enabled.contains(AlgorithmSet::from(algorithm))
    }

    /// Current bitmask, OR of `1 << code` for enabled algorithms.
    pub fn enabled_algorithms_bitset(&self) -> u32 {
        self.enabled.bits()
    }

    pub fn default_algorithm(&self) -> Option<Algorithm> {
        self.default_algorithm
    }

    pub fn default_level(&self) -> Option<Level> {
        self.default_level
    }

    /// Canonical integer code of the default algorithm, if set.
    pub fn default_algorithm_code(&self) -> Option<u32> {
        self.default_algorithm.map(Algorithm::code)
    }

    /// Canonical integer code of the default level, if set.
    pub fn default_level_code(&self) -> Option<u32> {
        self.default_level.map(Level::code)
    }

    /// Canonical names of the currently enabled algorithms, in code order.
    pub fn enabled_algorithm_names(&self) -> Vec<&'static str> {
        ALGORITHM_NAMES
            .iter()
            .filter(|(_, algorithm)| self.is_algorithm_enabled(*algorithm))
            .map(|(name, _)| *name)
            .collect()
    }

    fn resolve_all<I, S>(names: I) -> Result<AlgorithmSet, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bits = AlgorithmSet::empty();
        for name in names {
            bits |= AlgorithmSet::from(resolve_algorithm(name.as_ref())?);
        }
        Ok(bits)
    }
}

impl fmt::Display for CompressionOptions {
    /// Human-readable summary; never fails.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enabled algorithms: {}", self.enabled_algorithm_names().join(", "))?;
        if let Some(algorithm) = self.default_algorithm {
            write!(f, ", default algorithm: {}", algorithm.name())?;
        }
        if let Some(level) = self.default_level {
            write!(f, ", default level: {}", level.name())?;
        }
        Ok(())
    }
}

// The default bitset must cover exactly the known algorithms.
const _: () = assert!(AlgorithmSet::all().bits() == (1u32 << ALGORITHM_COUNT) - 1);
