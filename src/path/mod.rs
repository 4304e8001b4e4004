//! Path derivation for coursepath.
//!
//! This module turns a content hierarchy into a filesystem destination:
//! - Sanitization of display names into platform-safe segments
//! - Length-budgeted segment composition with order prefixes
//! - Assembly of the full path under a resolved download root, with a
//!   total-length ceiling

mod builder;
mod sanitize;
mod segment;

pub use builder::PathBuilder;
pub use sanitize::sanitize;
pub use segment::{compose, truncate, ELLIPSIS};
