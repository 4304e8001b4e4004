//! Destination-path assembly for content files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::Config;
use crate::content::{ContentKind, ContentNode, FileNode};
use crate::prefs::UserPrefs;
use crate::{CoursePathError, Result};

use super::segment::compose;

/// Derives filesystem destination paths for content files.
///
/// Holds a configuration snapshot and a per-user preference source, both
/// injected by the embedding application. Every call to
/// [`build_path`](Self::build_path) is independent; the builder keeps no
/// mutable state, so one builder may serve concurrent callers.
#[derive(Debug, Clone)]
pub struct PathBuilder<'a, P: UserPrefs> {
    config: &'a Config,
    prefs: &'a P,
}

impl<'a, P: UserPrefs> PathBuilder<'a, P> {
    /// Create a builder over the given configuration and preferences.
    pub fn new(config: &'a Config, prefs: &'a P) -> Self {
        Self { config, prefs }
    }

    /// Derive the destination path for one file of the hierarchy.
    ///
    /// `user` is the authenticated user id, or `None` for anonymous
    /// derivation (no overrides, no personal root). The download root
    /// directory is created if missing; that is the only side effect.
    ///
    /// # Errors
    ///
    /// - [`CoursePathError::Config`] when no download root is configured.
    /// - [`CoursePathError::Io`] when the root directory cannot be created.
    /// - [`CoursePathError::PathTooLong`] when the total-length ceiling
    ///   leaves no room for any file segment.
    pub fn build_path(
        &self,
        user: Option<i64>,
        course: &ContentNode,
        module: &ContentNode,
        lesson: &ContentNode,
        file: &FileNode,
    ) -> Result<PathBuf> {
        let base = self.resolve_base(user)?;
        fs::create_dir_all(&base)?;

        let budgets = &self.config.budgets;
        let course_seg = self.folder_segment(user, ContentKind::Course, course, budgets.course);
        let module_seg = self.folder_segment(user, ContentKind::Module, module, budgets.module);
        let lesson_seg = self.folder_segment(user, ContentKind::Lesson, lesson, budgets.lesson);
        let file_seg = self.file_segment(user, file, budgets.file);

        let path = Self::join(&base, &course_seg, &module_seg, &lesson_seg, &file_seg);
        let total = path.to_string_lossy().chars().count();

        if total > budgets.max_path {
            // Only the file segment absorbs the overage; folder segments
            // are never retroactively shortened.
            let overage = total - budgets.max_path;
            let file_len = file_seg.chars().count();
            if overage >= file_len {
                return Err(CoursePathError::PathTooLong(format!(
                    "folder segments leave no room for a filename within {} characters ({} over)",
                    budgets.max_path, overage
                )));
            }
            warn!(
                total,
                ceiling = budgets.max_path,
                "assembled path over ceiling, shortening file segment"
            );
            let shortened: String = file_seg.chars().take(file_len - overage).collect();
            let path = Self::join(&base, &course_seg, &module_seg, &lesson_seg, &shortened);
            debug!(path = %path.display(), "derived content path");
            return Ok(path);
        }

        debug!(path = %path.display(), "derived content path");
        Ok(path)
    }

    /// Resolve the download root for this call.
    ///
    /// A non-empty personal root of an authenticated user wins over the
    /// system-wide root; relative roots resolve against the application
    /// root directory.
    fn resolve_base(&self, user: Option<i64>) -> Result<PathBuf> {
        let root = user
            .and_then(|uid| self.prefs.download_root(uid))
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| {
                self.config
                    .storage
                    .download_root
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from)
            })
            .ok_or_else(|| CoursePathError::Config("download root is not set".to_string()))?;

        if root.is_absolute() {
            Ok(root)
        } else {
            Ok(Path::new(&self.config.storage.app_root).join(root))
        }
    }

    /// Resolve the display name for a node: per-user override first, then
    /// the formatted name when non-empty, then the stored name.
    fn display_name(&self, user: Option<i64>, kind: ContentKind, node: &ContentNode) -> String {
        if let Some(uid) = user {
            if let Some(name) = self.prefs.name_override(uid, kind, node.id) {
                return name;
            }
        }
        node.formatted_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(node.name.as_deref())
            .unwrap_or("")
            .to_string()
    }

    /// Zero-padded order prefix, e.g. `"007. "`. Missing orders sort first.
    fn order_prefix(node: &ContentNode) -> String {
        format!("{:03}. ", node.order.unwrap_or(0))
    }

    fn folder_segment(
        &self,
        user: Option<i64>,
        kind: ContentKind,
        node: &ContentNode,
        budget: usize,
    ) -> String {
        let name = self.display_name(user, kind, node);
        compose(&name, budget, false, &Self::order_prefix(node), "")
    }

    fn file_segment(&self, user: Option<i64>, file: &FileNode, budget: usize) -> String {
        let name = self.display_name(user, ContentKind::File, &file.node);
        let suffix = file
            .file_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!(".{t}"))
            .unwrap_or_default();
        compose(&name, budget, true, &Self::order_prefix(&file.node), &suffix)
    }

    fn join(base: &Path, course: &str, module: &str, lesson: &str, file: &str) -> PathBuf {
        base.join(course).join(module).join(lesson).join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{MemoryPrefs, NoPrefs};
    use tempfile::TempDir;

    fn hierarchy() -> (ContentNode, ContentNode, ContentNode, FileNode) {
        (
            ContentNode::new(1).with_order(7).with_name("Intro to X"),
            ContentNode::new(2).with_order(1).with_name("Basics"),
            ContentNode::new(3).with_name("Setup"),
            FileNode::new(4).with_name("lecture").with_file_type("mp4"),
        )
    }

    fn config_with_root(root: &Path) -> Config {
        let mut config = Config::default();
        config.storage.download_root = Some(root.to_string_lossy().into_owned());
        config
    }

    #[test]
    fn test_build_path_end_to_end() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());
        let builder = PathBuilder::new(&config, &NoPrefs);
        let (course, module, lesson, file) = hierarchy();

        let path = builder
            .build_path(None, &course, &module, &lesson, &file)
            .unwrap();

        assert_eq!(
            path,
            temp.path()
                .join("007. Intro to X")
                .join("001. Basics")
                .join("000. Setup")
                .join("000. lecture.mp4")
        );
    }

    #[test]
    fn test_missing_root_is_config_error() {
        let config = Config::default();
        let builder = PathBuilder::new(&config, &NoPrefs);
        let (course, module, lesson, file) = hierarchy();

        let result = builder.build_path(None, &course, &module, &lesson, &file);
        assert!(matches!(result, Err(CoursePathError::Config(_))));
    }

    #[test]
    fn test_user_root_wins_over_system_root() {
        let system = TempDir::new().unwrap();
        let personal = TempDir::new().unwrap();
        let config = config_with_root(system.path());
        let mut prefs = MemoryPrefs::new();
        prefs.set_download_root(9, personal.path());
        let builder = PathBuilder::new(&config, &prefs);
        let (course, module, lesson, file) = hierarchy();

        let path = builder
            .build_path(Some(9), &course, &module, &lesson, &file)
            .unwrap();
        assert!(path.starts_with(personal.path()));

        // Other users still get the system root
        let path = builder
            .build_path(Some(10), &course, &module, &lesson, &file)
            .unwrap();
        assert!(path.starts_with(system.path()));
    }

    #[test]
    fn test_anonymous_ignores_user_prefs() {
        let system = TempDir::new().unwrap();
        let personal = TempDir::new().unwrap();
        let config = config_with_root(system.path());
        let mut prefs = MemoryPrefs::new();
        prefs.set_download_root(9, personal.path());
        prefs.set_name_override(9, ContentKind::Course, 1, "Renamed");
        let builder = PathBuilder::new(&config, &prefs);
        let (course, module, lesson, file) = hierarchy();

        let path = builder
            .build_path(None, &course, &module, &lesson, &file)
            .unwrap();
        assert!(path.starts_with(system.path()));
        assert!(path.to_string_lossy().contains("007. Intro to X"));
    }

    #[test]
    fn test_relative_root_resolves_against_app_root() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.download_root = Some("downloads".to_string());
        config.storage.app_root = temp.path().to_string_lossy().into_owned();
        let builder = PathBuilder::new(&config, &NoPrefs);
        let (course, module, lesson, file) = hierarchy();

        let path = builder
            .build_path(None, &course, &module, &lesson, &file)
            .unwrap();
        assert!(path.starts_with(temp.path().join("downloads")));
        assert!(temp.path().join("downloads").is_dir());
    }

    #[test]
    fn test_creates_base_directory_idempotently() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("root");
        let config = config_with_root(&root);
        let builder = PathBuilder::new(&config, &NoPrefs);
        let (course, module, lesson, file) = hierarchy();

        builder
            .build_path(None, &course, &module, &lesson, &file)
            .unwrap();
        assert!(root.is_dir());

        // Second call with the directory already present must not fail
        builder
            .build_path(None, &course, &module, &lesson, &file)
            .unwrap();
    }

    #[test]
    fn test_override_beats_formatted_and_stored_name() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());
        let mut prefs = MemoryPrefs::new();
        prefs.set_name_override(5, ContentKind::Lesson, 3, "My Notes");
        let builder = PathBuilder::new(&config, &prefs);
        let (course, module, mut lesson, file) = hierarchy();
        lesson = lesson.with_formatted_name("Formatted Setup");

        let path = builder
            .build_path(Some(5), &course, &module, &lesson, &file)
            .unwrap();
        assert!(path.to_string_lossy().contains("000. My Notes"));
        assert!(!path.to_string_lossy().contains("Formatted Setup"));
    }

    #[test]
    fn test_formatted_name_beats_stored_name() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());
        let builder = PathBuilder::new(&config, &NoPrefs);
        let (mut course, module, lesson, file) = hierarchy();
        course = course.with_formatted_name("Course 01 - Intro");

        let path = builder
            .build_path(None, &course, &module, &lesson, &file)
            .unwrap();
        assert!(path.to_string_lossy().contains("007. Course 01 - Intro"));
    }

    #[test]
    fn test_empty_formatted_name_falls_through() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());
        let builder = PathBuilder::new(&config, &NoPrefs);
        let (mut course, module, lesson, file) = hierarchy();
        course = course.with_formatted_name("");

        let path = builder
            .build_path(None, &course, &module, &lesson, &file)
            .unwrap();
        assert!(path.to_string_lossy().contains("007. Intro to X"));
    }

    #[test]
    fn test_nameless_nodes_get_placeholders() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());
        let builder = PathBuilder::new(&config, &NoPrefs);

        let course = ContentNode::new(1);
        let module = ContentNode::new(2);
        let lesson = ContentNode::new(3);
        let file = FileNode::new(4);

        let path = builder
            .build_path(None, &course, &module, &lesson, &file)
            .unwrap();
        let s = path.to_string_lossy();
        assert!(s.contains("000. unnamed_folder"));
        assert!(s.ends_with("000. untitled"));
    }

    #[test]
    fn test_file_without_extension_has_no_dot() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());
        let builder = PathBuilder::new(&config, &NoPrefs);
        let (course, module, lesson, _) = hierarchy();
        let file = FileNode::new(4).with_order(2).with_name("readme");

        let path = builder
            .build_path(None, &course, &module, &lesson, &file)
            .unwrap();
        assert!(path.to_string_lossy().ends_with("002. readme"));
    }

    #[test]
    fn test_ceiling_shortens_only_file_segment() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());
        let builder = PathBuilder::new(&config, &NoPrefs);

        let long = "x".repeat(100);
        let course = ContentNode::new(1).with_name(&long);
        let module = ContentNode::new(2).with_name(&long);
        let lesson = ContentNode::new(3).with_name(&long);
        let file = FileNode::new(4).with_name(&long).with_file_type("mp4");

        let path = builder
            .build_path(None, &course, &module, &lesson, &file)
            .unwrap();
        let s = path.to_string_lossy();

        assert_eq!(s.chars().count(), 260);
        // Folder segments keep their full budgeted length
        let course_seg = format!("000. {}", "x".repeat(58));
        assert!(s.contains(&format!("{course_seg}…")));
    }

    #[test]
    fn test_ceiling_overflow_is_path_too_long() {
        let temp = TempDir::new().unwrap();
        let mut config = config_with_root(temp.path());
        // Ceiling so low the folder segments alone exceed it
        config.budgets.max_path = temp.path().to_string_lossy().chars().count() + 10;
        let builder = PathBuilder::new(&config, &NoPrefs);

        let long = "x".repeat(100);
        let course = ContentNode::new(1).with_name(&long);
        let module = ContentNode::new(2).with_name(&long);
        let lesson = ContentNode::new(3).with_name(&long);
        let file = FileNode::new(4).with_name(&long).with_file_type("mp4");

        let result = builder.build_path(None, &course, &module, &lesson, &file);
        assert!(matches!(result, Err(CoursePathError::PathTooLong(_))));
    }
}
