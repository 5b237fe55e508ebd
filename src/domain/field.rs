//! Shared behaviour of validated field values.

/// Normalize text for substring matching.
///
/// Lower-cases ASCII letters and strips hyphens. Non-ASCII characters are
/// left untouched, so matching is locale-insensitive.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A validated primitive value stored on a record.
pub trait Field {
    /// The raw value as it was accepted at construction.
    fn value(&self) -> &str;

    /// Whether `needle` occurs in the normalized value.
    ///
    /// The needle is normalized too, so callers may pass raw user input.
    fn contains(&self, needle: &str) -> bool {
        normalize(self.value()).contains(&normalize(needle))
    }
}
