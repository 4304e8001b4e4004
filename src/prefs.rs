//! Per-user preference lookups for coursepath.
//!
//! Name overrides and personal download roots live in the embedding
//! application's persistence layer. Path derivation only needs two
//! read-only lookups, exposed here as a trait; callers hand in whatever
//! snapshot implementation they have.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::content::ContentKind;

/// Read-only per-user settings consumed during path derivation.
///
/// Both lookups are keyed by user id; a `None` result means "no
/// preference stored", never an error. Implementations are expected to
/// behave as immutable snapshots for the duration of one
/// [`build_path`](crate::PathBuilder::build_path) call.
pub trait UserPrefs {
    /// Replacement display name for one content node, if the user set one.
    ///
    /// At most one override exists per (user, kind, object id) key.
    fn name_override(&self, user_id: i64, kind: ContentKind, object_id: i64) -> Option<String>;

    /// The user's personal download root, if configured.
    fn download_root(&self, user_id: i64) -> Option<PathBuf>;
}

/// In-memory [`UserPrefs`] implementation.
///
/// Backed by hash maps, so the one-override-per-key invariant holds by
/// construction: inserting for an existing key replaces the prior value.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    overrides: HashMap<(i64, ContentKind, i64), String>,
    roots: HashMap<i64, PathBuf>,
}

impl MemoryPrefs {
    /// Create an empty preference table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a display-name override for one content node.
    pub fn set_name_override(
        &mut self,
        user_id: i64,
        kind: ContentKind,
        object_id: i64,
        name: impl Into<String>,
    ) {
        self.overrides.insert((user_id, kind, object_id), name.into());
    }

    /// Set a personal download root for one user.
    pub fn set_download_root(&mut self, user_id: i64, root: impl Into<PathBuf>) {
        self.roots.insert(user_id, root.into());
    }
}

impl UserPrefs for MemoryPrefs {
    fn name_override(&self, user_id: i64, kind: ContentKind, object_id: i64) -> Option<String> {
        self.overrides.get(&(user_id, kind, object_id)).cloned()
    }

    fn download_root(&self, user_id: i64) -> Option<PathBuf> {
        self.roots.get(&user_id).cloned()
    }
}

/// [`UserPrefs`] implementation with no stored preferences.
///
/// For callers that derive paths outside any user context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrefs;

impl UserPrefs for NoPrefs {
    fn name_override(&self, _user_id: i64, _kind: ContentKind, _object_id: i64) -> Option<String> {
        None
    }

    fn download_root(&self, _user_id: i64) -> Option<PathBuf> {
        None
    }
}
