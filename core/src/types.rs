//! types.rs
//! Closed algorithm/level enumerations and the configuration error type.
//!
//! Notes:
//! - Codes are stable wire values; the channel layer reads them as plain
//!   integers, so the enums are #[repr(u32)] with explicit discriminants.
//! - Algorithm bit positions are derived (`1 << code`), never stored.

use std::fmt;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::{algorithm_ids, level_ids};

/// Negotiable compression algorithm.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Identity = algorithm_ids::IDENTITY,
    Deflate = algorithm_ids::DEFLATE,
    Gzip = algorithm_ids::GZIP,
}

impl Algorithm {
    /// Canonical integer code.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Bit position inside the enabled-algorithm bitset.
    pub fn bit(self) -> u32 {
        1 << self.code()
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Identity => "identity",
            Algorithm::Deflate => "deflate",
            Algorithm::Gzip => "gzip",
        }
    }

    pub fn verify(raw: u32) -> Result<(), OptionsError> {
        match raw {
            x if x == Algorithm::Identity as u32 => Ok(()),
            x if x == Algorithm::Deflate as u32 => Ok(()),
            x if x == Algorithm::Gzip as u32 => Ok(()),
            _ => Err(OptionsError::UnknownAlgorithmCode { raw }),
        }
    }
}

/// Compression aggressiveness hint.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    None = level_ids::NONE,
    Low = level_ids::LOW,
    Medium = level_ids::MEDIUM,
    High = level_ids::HIGH,
}

impl Level {
    /// Canonical integer code.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }

    pub fn verify(raw: u32) -> Result<(), OptionsError> {
        match raw {
            x if x == Level::None as u32 => Ok(()),
            x if x == Level::Low as u32 => Ok(()),
            x if x == Level::Medium as u32 => Ok(()),
            x if x == Level::High as u32 => Ok(()),
            _ => Err(OptionsError::UnknownLevelCode { raw }),
        }
    }
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// Name does not match any known algorithm (identity|deflate|gzip).
    InvalidAlgorithmName { name: String },

    /// Name does not match any known level (none|low|medium|high).
    InvalidLevelName { name: String },

    /// Attempt to set a default algorithm whose bit is currently cleared.
    DefaultAlgorithmDisabled { algorithm: Algorithm },

    /// Raw integer code outside the algorithm registry.
    UnknownAlgorithmCode { raw: u32 },

    /// Raw integer code outside the level registry.
    UnknownLevelCode { raw: u32 },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use OptionsError::*;
        match self {
            InvalidAlgorithmName { name } =>
                write!(f, "invalid compression algorithm name: {:?}", name),
            InvalidLevelName { name } =>
                write!(f, "invalid compression level name: {:?}", name),
            DefaultAlgorithmDisabled { algorithm } =>
                write!(f, "default algorithm {} is not enabled", algorithm.name()),
            UnknownAlgorithmCode { raw } =>
                write!(f, "unknown algorithm code: {}",
                       enum_name_or_hex::<Algorithm>(*raw)),
            UnknownLevelCode { raw } =>
                write!(f, "unknown level code: {}",
                       enum_name_or_hex::<Level>(*raw)),
        }
    }
}

impl std::error::Error for OptionsError {}
