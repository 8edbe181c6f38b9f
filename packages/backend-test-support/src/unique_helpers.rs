//! Unique test data, so suites sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}

/// A nickname that fits the 64-character column: the prefix is cut to
/// 30 characters before the 26-character ULID is appended.
pub fn unique_nickname(prefix: &str) -> String {
    let prefix: String = prefix.chars().take(30).collect();
    format!("{prefix}_{}", Ulid::new())
}
