//! Application-level configuration constants.

// Mounting
pub const ROOT_ELEMENT_ID: &str = "app";

// Score rules
pub const WIN_SCORE: u32 = 11;
pub const WIN_MARGIN: u32 = 2;

// Contact form limits (UTF-16 code units)
pub const NAME_MIN_LEN: usize = 2;
pub const MESSAGE_MIN_LEN: usize = 6;
pub const MESSAGE_MAX_LEN: usize = 500;

// Countdown
pub const TICK_MS: u32 = 1_000;
pub const SECOND_MS: i64 = 1_000;
pub const MINUTE_MS: i64 = SECOND_MS * 60;
pub const HOUR_MS: i64 = MINUTE_MS * 60;
pub const DAY_MS: i64 = HOUR_MS * 24;
