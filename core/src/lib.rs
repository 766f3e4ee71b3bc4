//! compression-options
//!
//! Compression configuration model for channel construction.
//! Validates algorithm/level names, tracks the enabled-algorithm bitset,
//! and exports the wire-exact channel argument mapping.
//! No compression is performed here and no network or process resource
//! is held.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Registries, config object, exporter
pub mod registry;
pub mod options;
pub mod channel_args;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::channel_args::channel_args;
    pub use crate::options::{AlgorithmSet, CompressionOptions};
    pub use crate::registry::{resolve_algorithm, resolve_level};
    pub use crate::types::{Algorithm, Level, OptionsError};
}
