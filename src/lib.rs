//! coursepath - destination paths for hierarchical course content
//!
//! Derives deterministic, platform-safe, length-bounded filesystem paths
//! for a Course → Module → Lesson → File hierarchy, honoring per-user
//! display-name overrides and a total path-length ceiling.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod path;
pub mod prefs;

pub use config::{BudgetConfig, Config, LoggingConfig, StorageConfig};
pub use content::{ContentKind, ContentNode, FileNode};
pub use error::{CoursePathError, Result};
pub use path::{compose, sanitize, truncate, PathBuilder, ELLIPSIS};
pub use prefs::{MemoryPrefs, NoPrefs, UserPrefs};
