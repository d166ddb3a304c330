//! Slug generation for entity identifiers.
//!
//! Entity ids and unique ids are derived from the device name, so two hubs
//! configured with the same device names produce the same identifiers.

use deunicode::deunicode;

/// Turn a free-form name into a lowercase `snake_case` slug.
///
/// Non-ASCII text is transliterated first (`Küche` becomes `kuche`). Runs of
/// characters outside `[a-z0-9]` then collapse into a single `_`, and
/// leading or trailing separators are dropped. A name with nothing left
/// becomes `"unknown"`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_sep = false;

    for ch in ascii.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(ch);
        } else {
            pending_sep = true;
        }
    }

    if slug.is_empty() {
        "unknown".to_string()
    } else {
        slug
    }
}
