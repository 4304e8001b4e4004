//! Segment truncation and composition.

use super::sanitize::sanitize;

/// Truncation marker appended when a name is cut to fit its budget.
///
/// A single-character marker so it costs exactly one character of the
/// budget; the specific glyph carries no meaning beyond being visible.
pub const ELLIPSIS: char = '…';

/// Placeholder body for folders whose budget cannot fit any real name.
const FOLDER_PLACEHOLDER: &str = "default_k";

/// Placeholder body for files whose budget cannot fit any real name.
const FILE_PLACEHOLDER: &str = "file_k";

/// Fallback name for a file whose sanitized name is empty.
const UNTITLED_FILE: &str = "untitled";

/// Fallback name for a folder whose sanitized name is empty.
const UNNAMED_FOLDER: &str = "unnamed_folder";

/// Shorten `text` to at most `max_len` characters.
///
/// Returns the input unchanged when it already fits. Budgets below 3
/// characters are too small for a marker, so the text is cut bare;
/// otherwise the result is `max_len - 1` characters plus [`ELLIPSIS`],
/// exactly `max_len` characters long.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len < 3 {
        return text.chars().take(max_len).collect();
    }
    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Compose one path segment from an order prefix, a raw display name and
/// an optional suffix (file extension), within a `max_len` budget.
///
/// The prefix and suffix are budgeted out first; the sanitized name gets
/// whatever remains. An empty sanitized name is replaced by a
/// placeholder (`untitled` for files, `unnamed_folder` for folders).
/// When the budget cannot fit the prefix, suffix and at least one name
/// character, a fixed placeholder segment is emitted instead, itself
/// right-truncated if necessary.
///
/// The returned segment never exceeds `max_len` characters.
pub fn compose(raw_name: &str, max_len: usize, is_file: bool, prefix: &str, suffix: &str) -> String {
    let fixed = prefix.chars().count() + suffix.chars().count();
    if max_len <= fixed + 1 {
        return placeholder_segment(max_len, is_file, prefix, suffix);
    }

    let available = max_len - fixed;
    let name = sanitize(raw_name);
    let name = if name.is_empty() {
        if is_file {
            UNTITLED_FILE.to_string()
        } else {
            UNNAMED_FOLDER.to_string()
        }
    } else {
        name
    };

    format!("{prefix}{}{suffix}", truncate(&name, available))
}

/// Emit a placeholder segment for a degenerate budget.
///
/// Keeps the suffix (extension) intact when the segment is a file and
/// the budget leaves room for it; otherwise cuts from the right.
fn placeholder_segment(max_len: usize, is_file: bool, prefix: &str, suffix: &str) -> String {
    let candidate = if is_file {
        format!("{prefix}{FILE_PLACEHOLDER}{suffix}")
    } else {
        format!("{prefix}{FOLDER_PLACEHOLDER}")
    };
    if candidate.chars().count() <= max_len {
        return candidate;
    }

    let suffix_len = suffix.chars().count();
    if is_file && suffix_len < max_len {
        let head: String = format!("{prefix}{FILE_PLACEHOLDER}")
            .chars()
            .take(max_len - suffix_len)
            .collect();
        return format!("{head}{suffix}");
    }

    candidate.chars().take(max_len).collect()
}
