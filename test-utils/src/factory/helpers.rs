//! Shared helper utilities for factory methods.

/// Counter for generating unique snowflake-like IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Base added to the counter so generated IDs look like Discord snowflakes.
const SNOWFLAKE_BASE: u64 = 900_000_000_000_000_000;

/// Gets the next unique ID for test data, formatted as a Discord snowflake string.
pub fn next_id() -> String {
    let id = COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    (SNOWFLAKE_BASE + id).to_string()
}

/// Pads an icon hash to Discord's format.
///
/// Static icon hashes are 32 characters; animated ones carry an `a_` prefix and are
/// 34 characters. Shorter hashes are right-padded with zeros, longer ones are kept.
pub fn pad_icon_hash(hash: &str) -> String {
    let len = if hash.starts_with("a_") { 34 } else { 32 };

    if hash.len() < len {
        format!("{:0<width$}", hash, width = len)
    } else {
        hash.to_string()
    }
}
