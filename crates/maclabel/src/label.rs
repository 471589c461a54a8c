//! Owned label type: parse, query, mutate, serialize.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LabelError, Result};

/// An owned set of key-value label entries for one file.
///
/// Entries are kept sorted by key with unique keys, so [`Label::to_wire`]
/// always emits a buffer that satisfies the binary-lookup precondition of
/// the wire layer.
///
/// Unlike [`maclabel_wire`], which treats all data as opaque bytes, the
/// owned layer requires keys and values to be UTF-8. The wire format itself
/// stays encoding-agnostic; non-UTF-8 labels can still be read zero-copy
/// through `maclabel_wire` directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label {
    entries: BTreeMap<String, String>,
}

impl Label {
    /// Create an empty label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strictly parse a wire-format buffer.
    ///
    /// Blank lines are ignored. Any malformed line (missing `=`, empty key,
    /// embedded NUL), non-UTF-8 line, or duplicate key fails the whole
    /// parse with a line-numbered error.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (idx, line) in buf.split(|&b| b == b'\n').enumerate() {
            let line_no = idx + 1;
            if line.is_empty() {
                continue;
            }
            if line.contains(&0) {
                return Err(LabelError::EmbeddedNul { line: line_no });
            }
            let eq = line
                .iter()
                .position(|&b| b == b'=')
                .ok_or(LabelError::MissingSeparator { line: line_no })?;
            if eq == 0 {
                return Err(LabelError::EmptyKey { line: line_no });
            }
            let key = std::str::from_utf8(&line[..eq])
                .map_err(|_| LabelError::InvalidUtf8 { line: line_no })?;
            let value = std::str::from_utf8(&line[eq + 1..])
                .map_err(|_| LabelError::InvalidUtf8 { line: line_no })?;
            if entries.contains_key(key) {
                return Err(LabelError::DuplicateKey {
                    key: key.to_string(),
                    line: line_no,
                });
            }
            entries.insert(key.to_string(), value.to_string());
        }

        debug!(entries = entries.len(), "parsed label");
        Ok(Self { entries })
    }

    /// Leniently parse a wire-format buffer.
    ///
    /// Applies the wire iterator's skip semantics: malformed lines are
    /// dropped, as are non-UTF-8 entries. On duplicate keys the last
    /// occurrence wins.
    pub fn parse_lenient(buf: &[u8]) -> Self {
        let mut entries = BTreeMap::new();
        for entry in maclabel_wire::entries(buf) {
            if let (Some(key), Some(value)) = (entry.key_str(), entry.value_str()) {
                entries.insert(key.to_string(), value.to_string());
            }
        }
        debug!(entries = entries.len(), "leniently parsed label");
        Self { entries }
    }

    /// Get the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the label has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Insert or replace an entry, validating both halves against the wire
    /// format first.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        let value = value.into();

        if key.is_empty() {
            return Err(LabelError::InvalidKey {
                reason: "key must not be empty".into(),
            });
        }
        for forbidden in ['=', '\n', '\0'] {
            if key.contains(forbidden) {
                return Err(LabelError::InvalidKey {
                    reason: format!("key must not contain {forbidden:?}"),
                });
            }
        }
        for forbidden in ['\n', '\0'] {
            if value.contains(forbidden) {
                return Err(LabelError::InvalidValue {
                    reason: format!("value must not contain {forbidden:?}"),
                });
            }
        }

        self.entries.insert(key, value);
        Ok(())
    }

    /// Remove an entry, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Serialize to the wire format: one `key=value\n` line per entry,
    /// sorted by key.
    ///
    /// The output always passes `maclabel_wire::validate` and is sorted
    /// with unique keys, so `maclabel_wire::find` is safe on it.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for (key, value) in &self.entries {
            buf.extend_from_slice(key.as_bytes());
            buf.push(b'=');
            buf.extend_from_slice(value.as_bytes());
            buf.push(b'\n');
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_label() {
        let label = Label::parse(b"network=allow\ntrust=system\ntype=daemon\n").unwrap();
        assert_eq!(label.len(), 3);
        assert_eq!(label.get("trust"), Some("system"));
        assert!(label.has("network"));
        assert!(!label.has("zzz"));
    }

    #[test]
    fn parse_tolerates_blank_lines_and_missing_final_newline() {
        let label = Label::parse(b"\na=1\n\nb=2").unwrap();
        assert_eq!(label.len(), 2);
        assert_eq!(label.get("b"), Some("2"));
    }

    #[test]
    fn parse_empty_buffer() {
        let label = Label::parse(b"").unwrap();
        assert!(label.is_empty());
    }

    #[test]
    fn parse_rejects_missing_separator_with_line_number() {
        let err = Label::parse(b"a=1\nnoequals\n").unwrap_err();
        assert_eq!(err, LabelError::MissingSeparator { line: 2 });
    }

    #[test]
    fn parse_rejects_empty_key() {
        let err = Label::parse(b"=value\n").unwrap_err();
        assert_eq!(err, LabelError::EmptyKey { line: 1 });
    }

    #[test]
    fn parse_rejects_embedded_nul() {
        let err = Label::parse(b"key=val\0ue\n").unwrap_err();
        assert_eq!(err, LabelError::EmbeddedNul { line: 1 });
    }

    #[test]
    fn parse_rejects_duplicate_key() {
        let err = Label::parse(b"a=1\na=2\n").unwrap_err();
        assert_eq!(err, LabelError::DuplicateKey { key: "a".into(), line: 2 });
    }

    #[test]
    fn parse_rejects_non_utf8() {
        let err = Label::parse(b"key=\xFF\xFE\n").unwrap_err();
        assert_eq!(err, LabelError::InvalidUtf8 { line: 1 });
    }

    #[test]
    fn lenient_parse_skips_malformed_lines() {
        let label = Label::parse_lenient(b"a=1\nnoequals\n=empty\nb=2\n");
        assert_eq!(label.len(), 2);
        assert_eq!(label.get("a"), Some("1"));
        assert_eq!(label.get("b"), Some("2"));
    }

    #[test]
    fn lenient_parse_last_duplicate_wins() {
        let label = Label::parse_lenient(b"a=1\na=2\n");
        assert_eq!(label.get("a"), Some("2"));
    }

    #[test]
    fn set_validates_keys() {
        let mut label = Label::new();
        assert!(label.set("", "x").is_err());
        assert!(label.set("a=b", "x").is_err());
        assert!(label.set("a\nb", "x").is_err());
        assert!(label.set("a\0b", "x").is_err());
        assert!(label.set("trust", "system").is_ok());
    }

    #[test]
    fn set_validates_values() {
        let mut label = Label::new();
        assert!(label.set("k", "line\nbreak").is_err());
        assert!(label.set("k", "nul\0byte").is_err());
        assert!(label.set("k", "a=b=c").is_ok());
        assert!(label.set("k2", "").is_ok());
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut label = Label::new();
        label.set("k", "old").unwrap();
        label.set("k", "new").unwrap();
        assert_eq!(label.get("k"), Some("new"));
        assert_eq!(label.len(), 1);
    }

    #[test]
    fn remove_returns_value() {
        let mut label = Label::parse(b"a=1\n").unwrap();
        assert_eq!(label.remove("a"), Some("1".into()));
        assert_eq!(label.remove("a"), None);
        assert!(label.is_empty());
    }

    #[test]
    fn to_wire_is_sorted_and_newline_terminated() {
        let mut label = Label::new();
        label.set("zeta", "1").unwrap();
        label.set("alpha", "2").unwrap();
        label.set("mid", "3").unwrap();
        assert_eq!(label.to_wire(), b"alpha=2\nmid=3\nzeta=1\n");
    }

    #[test]
    fn to_wire_output_validates_and_is_searchable() {
        let mut label = Label::new();
        label.set("network", "allow").unwrap();
        label.set("trust", "system").unwrap();
        label.set("type", "daemon").unwrap();
        let wire = label.to_wire();
        assert!(maclabel_wire::validate(&wire));
        assert_eq!(maclabel_wire::find(&wire, b"trust"), Some(&b"system"[..]));
        assert_eq!(maclabel_wire::count(&wire), 3);
    }

    #[test]
    fn parse_round_trips_through_wire() {
        let label = Label::parse(b"a=1\nb=2\nc=x=y\n").unwrap();
        assert_eq!(Label::parse(&label.to_wire()).unwrap(), label);
    }

    #[test]
    fn iter_in_key_order() {
        // Wire order is the producer's problem; the owned map iterates
        // sorted regardless.
        let label = Label::parse(b"b=2\na=1\n").unwrap();
        let keys: Vec<_> = label.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn strict_parse_is_stricter_than_wire_validate() {
        // The wire format is encoding-agnostic and allows repeated keys;
        // the owned layer rejects both. Everything else they judge alike.
        let non_utf8 = b"key=\xFF\xFE\n";
        assert!(maclabel_wire::validate(non_utf8));
        assert_eq!(
            Label::parse(non_utf8).unwrap_err(),
            LabelError::InvalidUtf8 { line: 1 }
        );

        let duplicate = b"a=1\na=2\n";
        assert!(maclabel_wire::validate(duplicate));
        assert_eq!(
            Label::parse(duplicate).unwrap_err(),
            LabelError::DuplicateKey { key: "a".into(), line: 2 }
        );
    }

    #[test]
    fn json_round_trip() {
        let mut label = Label::new();
        label.set("trust", "system").unwrap();
        label.set("network", "allow").unwrap();
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, r#"{"network":"allow","trust":"system"}"#);
        let back: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
    }
}
