//! Borrowed key-value entry views.

/// A single key-value entry borrowed from a label buffer.
///
/// Both spans point into the original buffer (no copies) and stay valid
/// exactly as long as it does. Neither span is null-terminated; use the
/// slice lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry<'a> {
    /// The key: non-empty, contains neither `=` nor `\n`.
    pub key: &'a [u8],
    /// The value: may contain `=` and may be empty, never contains `\n`.
    pub value: &'a [u8],
}

impl<'a> Entry<'a> {
    /// The key as UTF-8, if it is valid UTF-8. Keys are opaque bytes on the
    /// wire; encoding is the producer's business.
    pub fn key_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.key).ok()
    }

    /// The value as UTF-8, if it is valid UTF-8.
    pub fn value_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.value).ok()
    }

    /// Length-and-bytes equality between the value and an expected byte
    /// string. Handy for checking an entry against a known constant
    /// without leaving byte-slice land.
    pub fn value_matches(&self, expected: &[u8]) -> bool {
        self.value == expected
    }
}
