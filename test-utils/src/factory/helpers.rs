//! Shared helper utilities for factory methods.

use serde_json::Value;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Serializes feed entries into a feed document body.
///
/// # Arguments
/// - `entries` - Story or show entries produced by the factories
///
/// # Returns
/// - `Vec<u8>` - JSON array bytes as a feed would serve them
pub fn feed_bytes(entries: Vec<Value>) -> Vec<u8> {
    Value::Array(entries).to_string().into_bytes()
}
