/// Stable algorithm codes (u32) shared with the channel layer.
pub mod algorithm_ids {
    pub const IDENTITY: u32 = 0;
    pub const DEFLATE: u32 = 1;
    pub const GZIP: u32 = 2;
}

/// Stable level codes (u32). Plain values, no bit encoding.
pub mod level_ids {
    pub const NONE: u32 = 0;
    pub const LOW: u32 = 1;
    pub const MEDIUM: u32 = 2;
    pub const HIGH: u32 = 3;
}

/// Channel argument keys consumed by channel construction.
/// These strings are wire-exact; the channel layer matches them literally.
pub mod channel_arg_keys {
    pub const ENABLED_ALGORITHMS_BITSET: &str =
        "grpc.compression_enabled_algorithms_bitset";
    pub const DEFAULT_ALGORITHM: &str = "grpc.default_compression_algorithm";
    pub const DEFAULT_LEVEL: &str = "grpc.default_compression_level";
}

/// Number of known algorithms. A fresh config enables all of them:
/// `(1 << ALGORITHM_COUNT) - 1`.
pub const ALGORITHM_COUNT: u32 = 3;
