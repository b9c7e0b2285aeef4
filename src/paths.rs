//! Filename extraction for status display

/// Placeholder shown when an invocation has no usable path argument
pub const FILENAME_PLACEHOLDER: &str = "file";

/// Extract the display filename from a path argument
///
/// Returns the final `/`-separated segment of the path. Absent and empty
/// input yields the literal placeholder `"file"`, as does a path whose
/// final segment is empty (trailing slash, all separators). Input with no
/// separators is returned whole. Never panics.
pub fn display_filename(path: Option<&str>) -> String {
    let Some(path) = path else {
        return FILENAME_PLACEHOLDER.to_string();
    };
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => FILENAME_PLACEHOLDER.to_string(),
    }
}
