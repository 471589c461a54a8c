//! Strict whole-buffer format validation.

use crate::cursor::find_byte;

/// Check that `buf` is a well-formed label.
///
/// Every non-blank line must contain no NUL byte, at least one `=`, and a
/// non-empty key. Blank lines are ignored, as everywhere else. Unlike
/// iteration, which skips malformed lines, a single violation here fails
/// the whole buffer.
pub fn validate(buf: &[u8]) -> bool {
    let mut pos = 0usize;
    while pos < buf.len() {
        if buf[pos] == b'\n' {
            pos += 1;
            continue;
        }

        let start = pos;
        let line_end = match find_byte(&buf[start..], b'\n') {
            Some(off) => start + off,
            None => buf.len(),
        };
        let line = &buf[start..line_end];

        if line.contains(&0) {
            return false;
        }
        match find_byte(line, b'=') {
            None => return false,
            Some(0) => return false,
            Some(_) => {}
        }

        pos = if line_end < buf.len() {
            line_end + 1
        } else {
            buf.len()
        };
    }
    true
}
