//! Content hierarchy model for coursepath.
//!
//! The four hierarchy levels (Course → Module → Lesson → File) share the
//! same shape: a stable id, an optional ordering index, a stored name and
//! an optional pre-formatted display name. Files additionally carry an
//! extension. The levels are modeled as one node struct plus a kind tag
//! rather than four near-identical types.

/// The hierarchy level a node belongs to.
///
/// Also serves as the content-type tag for per-user name-override lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Top-level course.
    Course,
    /// Module within a course.
    Module,
    /// Lesson within a module.
    Lesson,
    /// File within a lesson.
    File,
}

impl ContentKind {
    /// Stable lowercase tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Course => "course",
            ContentKind::Module => "module",
            ContentKind::Lesson => "lesson",
            ContentKind::File => "file",
        }
    }
}

/// A node in the content hierarchy.
#[derive(Debug, Clone)]
pub struct ContentNode {
    /// Stable identifier within its level.
    pub id: i64,
    /// Position among siblings. `None` sorts as position zero.
    pub order: Option<u32>,
    /// Stored name, as listed from the platform. May be empty.
    pub name: Option<String>,
    /// Pre-formatted display name, preferred over `name` when non-empty.
    pub formatted_name: Option<String>,
}

impl ContentNode {
    /// Create a node with the given id and no name or order.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            order: None,
            name: None,
            formatted_name: None,
        }
    }

    /// Set the ordering index.
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the stored name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the pre-formatted display name.
    pub fn with_formatted_name(mut self, name: impl Into<String>) -> Self {
        self.formatted_name = Some(name.into());
        self
    }
}

/// A file node: the shared node shape plus an extension.
#[derive(Debug, Clone)]
pub struct FileNode {
    /// Shared node attributes.
    pub node: ContentNode,
    /// File extension without the leading dot (e.g. `"mp4"`).
    pub file_type: Option<String>,
}

impl FileNode {
    /// Create a file node with the given id.
    pub fn new(id: i64) -> Self {
        Self {
            node: ContentNode::new(id),
            file_type: None,
        }
    }

    /// Set the ordering index.
    pub fn with_order(mut self, order: u32) -> Self {
        self.node.order = Some(order);
        self
    }

    /// Set the stored name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.node.name = Some(name.into());
        self
    }

    /// Set the pre-formatted display name.
    pub fn with_formatted_name(mut self, name: impl Into<String>) -> Self {
        self.node.formatted_name = Some(name.into());
        self
    }

    /// Set the file extension (without the leading dot).
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }
}
