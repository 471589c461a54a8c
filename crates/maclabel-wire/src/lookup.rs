//! Key lookup: linear scan and bounded binary search.

use core::cmp::Ordering;

use crate::cursor::{entries, find_byte};

/// Default capacity of the stack-resident line index used by [`find`].
///
/// Labels with at least this many lines take the linear path. Callers with
/// different size profiles can tune the crossover via
/// [`find_with_capacity`].
pub const DEFAULT_INDEX_CAPACITY: usize = 64;

/// Byte-lexicographic comparison between an entry's key and a target key.
///
/// Shorter input orders before any input it is a prefix of. This is the
/// order producers must sort by; binary search is only correct because the
/// two sides agree on it.
pub fn compare_key(entry_key: &[u8], target: &[u8]) -> Ordering {
    entry_key.cmp(target)
}

/// Look up `key` by scanning every entry in order.
///
/// Does not require the label to be sorted. O(buffer length); intended for
/// small labels and as the fallback path of [`find`].
pub fn find_linear<'a>(buf: &'a [u8], key: &[u8]) -> Option<&'a [u8]> {
    entries(buf).find(|e| e.key == key).map(|e| e.value)
}

/// Look up `key` by binary search, assuming entries are sorted by key.
///
/// Equivalent to [`find_with_capacity`] with [`DEFAULT_INDEX_CAPACITY`].
pub fn find<'a>(buf: &'a [u8], key: &[u8]) -> Option<&'a [u8]> {
    find_with_capacity::<DEFAULT_INDEX_CAPACITY>(buf, key)
}

/// Look up `key` by binary search over a stack index of `N` line offsets.
///
/// Precondition (not verified): entries are sorted byte-lexicographically
/// by key, with unique keys. Feeding an unsorted label makes the result
/// unreliable, never unsound.
///
/// The buffer is walked once to record the start offset of each non-blank
/// line. Two conditions force a full [`find_linear`] fallback, which keeps
/// results correct rather than silently degraded:
///
/// - the index fills up, since a full index cannot prove it saw every line;
/// - binary search lands on a malformed line (no `=`, or an empty key),
///   which voids the sort-order assumption around it.
pub fn find_with_capacity<'a, const N: usize>(buf: &'a [u8], key: &[u8]) -> Option<&'a [u8]> {
    let mut starts = [0usize; N];
    let mut line_count = 0usize;

    let mut pos = 0usize;
    while pos < buf.len() && line_count < N {
        while pos < buf.len() && buf[pos] == b'\n' {
            pos += 1;
        }
        if pos >= buf.len() {
            break;
        }
        starts[line_count] = pos;
        line_count += 1;
        while pos < buf.len() && buf[pos] != b'\n' {
            pos += 1;
        }
    }

    if line_count >= N {
        return find_linear(buf, key);
    }

    let mut lo = 0usize;
    let mut hi = line_count;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let start = starts[mid];
        let line_end = match find_byte(&buf[start..], b'\n') {
            Some(off) => start + off,
            None => buf.len(),
        };
        let line = &buf[start..line_end];

        let eq = match find_byte(line, b'=') {
            Some(eq) if eq > 0 => eq,
            _ => return find_linear(buf, key),
        };

        match compare_key(&line[..eq], key) {
            Ordering::Equal => return Some(&line[eq + 1..]),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}
