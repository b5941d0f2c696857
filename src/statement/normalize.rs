//! Canonical form of a raw statement.

use alloc::string::String;

/// Reduce a raw statement to the single-line, lower-case text used for matching.
///
/// The outer whitespace is trimmed, every `;` is removed, and each run of
/// whitespace (newlines included) becomes one space before lower-casing.
/// Trailing whitespace left behind by a removed terminator is kept, so
/// `"a ;"` normalizes to `"a "`.
#[must_use]
pub fn normalize(statement: &str) -> String {
    let trimmed = statement.trim();
    let mut collapsed = String::with_capacity(trimmed.len());
    let mut in_whitespace = false;

    for c in trimmed.chars().filter(|&c| c != ';') {
        if c.is_whitespace() {
            if !in_whitespace {
                collapsed.push(' ');
                in_whitespace = true;
            }
        } else {
            collapsed.push(c);
            in_whitespace = false;
        }
    }

    collapsed.to_lowercase()
}
