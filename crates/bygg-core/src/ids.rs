//! ID prefix constants and generation helpers.
//!
//! IDs have the form `{prefix}-{8 hex chars}`, e.g. `ent-a3f8b2c1`.

/// Prefix for time entry identifiers.
pub const PREFIX_ENTRY: &str = "ent";

/// Generate a random identifier with the given prefix.
///
/// Returns `None` if the operating system random source is unavailable; the
/// caller decides on a fallback.
#[must_use]
pub fn random_id(prefix: &str) -> Option<String> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).ok()?;
    Some(format_id(prefix, u32::from_be_bytes(bytes)))
}

/// Format a numeric identifier body as `{prefix}-{08x}`.
#[must_use]
pub fn format_id(prefix: &str, value: u32) -> String {
    format!("{prefix}-{value:08x}")
}
