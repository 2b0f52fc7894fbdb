/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower clamp bound for quality scores.
pub const MIN_SCORE: i32 = 0;

/// Upper clamp bound for quality scores.
pub const MAX_SCORE: i32 = 100;
