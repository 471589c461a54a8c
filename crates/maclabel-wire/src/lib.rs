//! Allocation-free parser and lookup engine for the MacLabel wire format.
//!
//! A label is a byte buffer of newline-terminated `key=value` lines, stored
//! as one extended-attribute value:
//!
//! ```text
//! network=allow
//! trust=system
//! type=daemon
//! ```
//!
//! Keys cannot contain `=` or `\n`; the first `=` on a line terminates the
//! key. Values may contain `=` but not `\n`, and may be empty. The final
//! line's trailing `\n` is optional. Blank lines are ignored everywhere.
//!
//! Everything in this crate borrows the caller's buffer: no heap, no copies,
//! no std. It is safe to use in kernel-module contexts where the buffer is
//! whatever an extended-attribute read handed back.
//!
//! # Lookup
//!
//! Producers emit entries sorted by key in byte-lexicographic order with
//! unique keys. [`find`] exploits that with a bounded binary search over a
//! stack-resident line index, falling back to [`find_linear`] when the label
//! holds more lines than the index can, or when a malformed line voids the
//! sort-order assumption. [`find_linear`] never requires sortedness.
//!
//! # Leniency
//!
//! Iteration, counting, and lookup silently skip malformed lines (no `=`,
//! or an empty key). Only [`validate`] treats a malformed line as an error.

#![cfg_attr(not(test), no_std)]

pub mod cursor;
pub mod entry;
pub mod lookup;
pub mod validate;

pub use cursor::{count, entries, Entries, LabelCursor};
pub use entry::Entry;
pub use lookup::{
    compare_key, find, find_linear, find_with_capacity, DEFAULT_INDEX_CAPACITY,
};
pub use validate::validate;
