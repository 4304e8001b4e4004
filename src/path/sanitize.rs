//! Display-name sanitization for filesystem segments.

/// Characters that are illegal in a path segment on at least one
/// supported platform.
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Sanitize a display name into a platform-safe path segment.
///
/// Applies, in order:
/// - Removal of illegal characters (`< > : " / \ | ? *`) and control
///   characters (0x00–0x1F, 0x7F)
/// - Collapse of whitespace runs into a single space, with leading and
///   trailing whitespace trimmed
/// - Trim of trailing dots and spaces (Windows segment restriction)
/// - A trailing `_` appended to Windows reserved device names
///   (CON, PRN, AUX, NUL, COM1–COM9, LPT1–LPT9, case-insensitive)
///
/// Idempotent: sanitizing an already-sanitized string is a no-op. An
/// input with no legal characters sanitizes to the empty string; the
/// caller substitutes a placeholder in that case.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.chars() {
        if ILLEGAL_CHARS.contains(&ch) || ch <= '\u{1f}' || ch == '\u{7f}' {
            continue;
        }
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        // Leading whitespace never materializes; interior runs become one space
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }

    while out.ends_with('.') || out.ends_with(' ') {
        out.pop();
    }

    if is_reserved_name(&out) {
        out.push('_');
    }

    out
}

/// Whether a segment name collides with a Windows reserved device name.
fn is_reserved_name(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    match upper.as_str() {
        "CON" | "PRN" | "AUX" | "NUL" => true,
        _ => {
            (upper.len() == 4)
                && (upper.starts_with("COM") || upper.starts_with("LPT"))
                && upper[3..].chars().all(|c| ('1'..='9').contains(&c))
        }
    }
}
