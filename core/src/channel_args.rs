//! channel_args.rs
//! Export of a config snapshot into the channel argument mapping.
//!
//! Notes:
//! - Keys and integer codes are wire-exact; the channel layer matches the
//!   strings literally (see `constants::channel_arg_keys`).
//! - Unset defaults produce no entry at all, never a zero placeholder.
//! - Export is a pure read. Calling it repeatedly, or from several threads,
//!   yields the same mapping for the same config.

use std::collections::BTreeMap;

use crate::constants::channel_arg_keys;
use crate::options::CompressionOptions;

/// Builds the channel argument mapping handed to channel construction.
pub fn channel_args(options: &CompressionOptions) -> BTreeMap<&'static str, u32> {
    let mut args = BTreeMap::new();
    args.insert(
        channel_arg_keys::ENABLED_ALGORITHMS_BITSET,
        options.enabled_algorithms_bitset(),
    );
    if let Some(code) = options.default_algorithm_code() {
        args.insert(channel_arg_keys::DEFAULT_ALGORITHM, code);
    }
    if let Some(code) = options.default_level_code() {
        args.insert(channel_arg_keys::DEFAULT_LEVEL, code);
    }
    args
}
