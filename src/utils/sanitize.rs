//! Filename sanitization utilities

/// Name used when sanitizing leaves nothing to work with
const EMPTY_NAME: &str = "untitled";

/// Sanitize a metadata string for use as a single file name
///
/// Path separators (and NUL) are replaced with underscores so untrusted
/// album or track titles can never create subdirectories. Everything else
/// is kept as-is.
///
/// # Examples
///
/// ```
/// use importfeeds::utils::sanitize_filename;
///
/// assert_eq!(sanitize_filename("album/name"), "album_name");
/// assert_eq!(sanitize_filename("AC\\DC Live"), "AC_DC Live");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            _ => c,
        })
        .collect();

    if sanitized.is_empty() {
        EMPTY_NAME.to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_slashes() {
        assert_eq!(sanitize_filename("album/name"), "album_name");
        assert_eq!(sanitize_filename("BOTHERED / UNBOTHERED"), "BOTHERED _ UNBOTHERED");
    }

    #[test]
    fn test_sanitize_backslash() {
        assert_eq!(sanitize_filename("AC\\DC"), "AC_DC");
    }

    #[test]
    fn test_sanitize_triple_slash() {
        assert_eq!(sanitize_filename("LOVE /// DISCONNECT"), "LOVE ___ DISCONNECT");
    }

    #[test]
    fn test_no_changes_needed() {
        assert_eq!(
            sanitize_filename("Transistor: Original Soundtrack"),
            "Transistor: Original Soundtrack"
        );
        assert_eq!(sanitize_filename("  Album Name  "), "  Album Name  ");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(sanitize_filename(""), "untitled");
    }
}
