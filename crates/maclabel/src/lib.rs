//! Owned label layer over the MacLabel wire format.
//!
//! [`maclabel_wire`] reads labels zero-copy from a caller-supplied buffer
//! and never allocates. This crate sits above it for callers that do have
//! std: parse a buffer into an owned [`Label`], query and mutate it, and
//! serialize it back to a wire buffer whose entries are sorted with unique
//! keys — the contract binary lookup relies on.
//!
//! ```
//! use maclabel::Label;
//!
//! let label = Label::parse(b"network=allow\ntrust=system\n")?;
//! assert_eq!(label.get("trust"), Some("system"));
//!
//! let mut label = label.clone();
//! label.set("type", "daemon")?;
//! assert!(maclabel::wire::validate(&label.to_wire()));
//! # Ok::<(), maclabel::LabelError>(())
//! ```

pub mod error;
pub mod label;

pub use error::{LabelError, Result};
pub use label::Label;

// Re-export the zero-copy layer for callers that need both.
pub use maclabel_wire as wire;
