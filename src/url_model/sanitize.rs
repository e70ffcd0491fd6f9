//! Linux-safe path component sanitization.

/// Linux NAME_MAX: longest allowed file name, in bytes.
const NAME_MAX: usize = 255;

/// Sanitizes one path component derived from a URL.
///
/// Replaces NUL, slashes, whitespace, and control characters with `_`,
/// collapses runs of `_`, trims leading/trailing dots, spaces, and
/// underscores, and caps the component at 255 bytes. Components that
/// sanitize to nothing (including `.` and `..`) come back as `"_"`.
pub fn sanitize_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        let mapped = match c {
            '\0' | '/' | '\\' => '_',
            c if c.is_control() || c.is_whitespace() => '_',
            c => c,
        };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }

    let mut result = out
        .trim_matches(|c| c == '.' || c == ' ' || c == '_')
        .to_string();

    if result.len() > NAME_MAX {
        let mut end = NAME_MAX;
        while !result.is_char_boundary(end) {
            end -= 1;
        }
        result.truncate(end);
    }

    if result.is_empty() {
        "_".to_string()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_slashes_and_control_chars() {
        assert_eq!(sanitize_segment("a/b\\c.txt"), "a_b_c.txt");
        assert_eq!(sanitize_segment("file\x00name\x07.txt"), "file_name_.txt");
    }

    #[test]
    fn collapses_underscore_runs() {
        assert_eq!(sanitize_segment("a  \t b"), "a_b");
        assert_eq!(sanitize_segment("a__b"), "a_b");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(sanitize_segment(" ..file.txt.. "), "file.txt");
    }

    #[test]
    fn dot_dirs_become_placeholders() {
        assert_eq!(sanitize_segment("."), "_");
        assert_eq!(sanitize_segment(".."), "_");
        assert_eq!(sanitize_segment(""), "_");
    }

    #[test]
    fn caps_length_at_name_max_on_a_char_boundary() {
        let long = "é".repeat(200); // 400 bytes
        let out = sanitize_segment(&long);
        assert!(out.len() <= NAME_MAX);
        assert!(out.chars().all(|c| c == 'é'));
    }
}
