//! Single-pass iteration over label entries.

use crate::entry::Entry;

/// Find the first occurrence of `byte` in `haystack`.
pub(crate) fn find_byte(haystack: &[u8], byte: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == byte)
}

/// Iteration state over a label buffer.
///
/// A cursor makes one forward pass; to restart, construct a new cursor over
/// the same buffer. Blank lines and malformed lines (no `=`, or an empty
/// key) are skipped silently.
///
/// ```
/// use maclabel_wire::LabelCursor;
///
/// let buf = b"network=allow\ntrust=system\n";
/// let mut cursor = LabelCursor::new(buf);
/// while let Some(entry) = cursor.next_entry() {
///     // entry.key and entry.value borrow `buf`
///     assert!(!entry.key.is_empty());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct LabelCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> LabelCursor<'a> {
    /// Start a fresh pass over `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Advance to the next well-formed entry, or `None` when exhausted.
    ///
    /// Skipping is an explicit loop: a buffer of nothing but malformed
    /// lines must not consume stack proportional to its length.
    pub fn next_entry(&mut self) -> Option<Entry<'a>> {
        loop {
            // Skip any run of blank lines.
            while self.pos < self.buf.len() && self.buf[self.pos] == b'\n' {
                self.pos += 1;
            }
            if self.pos >= self.buf.len() {
                return None;
            }

            // Delimit the line: up to the next '\n' or end of buffer.
            let start = self.pos;
            let line_end = match find_byte(&self.buf[start..], b'\n') {
                Some(off) => start + off,
                None => self.buf.len(),
            };
            self.pos = if line_end < self.buf.len() {
                line_end + 1
            } else {
                self.buf.len()
            };

            let line = &self.buf[start..line_end];

            // The first '=' splits key from value; later '=' bytes belong
            // to the value. No '=' or an empty key is malformed: skip.
            match find_byte(line, b'=') {
                Some(eq) if eq > 0 => {
                    return Some(Entry {
                        key: &line[..eq],
                        value: &line[eq + 1..],
                    });
                }
                _ => continue,
            }
        }
    }
}

/// Iterator adapter over [`LabelCursor`].
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    cursor: LabelCursor<'a>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Entry<'a>> {
        self.cursor.next_entry()
    }
}

/// Iterate the well-formed entries of `buf` in buffer order.
pub fn entries(buf: &[u8]) -> Entries<'_> {
    Entries {
        cursor: LabelCursor::new(buf),
    }
}

/// Count the well-formed entries in `buf`.
///
/// Malformed lines are not counted, matching iteration.
pub fn count(buf: &[u8]) -> usize {
    entries(buf).count()
}
