//! Client filename handling

/// Used when sanitising leaves nothing
const FALLBACK_NAME: &str = "upload.docx";

/// Suffix check on the client-supplied name; content is not sniffed
pub fn has_docx_extension(filename: &str) -> bool {
    filename.ends_with(".docx")
}

/// Reduce a client filename to a safe ASCII basename
///
/// Non-ASCII characters are dropped, path separators become spaces, runs of
/// whitespace become `_`, anything outside `[A-Za-z0-9_.-]` is removed, and
/// leading/trailing dots and underscores are stripped.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// Sanitised name for display, never empty
pub fn display_name(filename: &str) -> String {
    let name = secure_filename(filename);
    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_gate() {
        assert!(has_docx_extension("report.docx"));
        assert!(!has_docx_extension("report.doc"));
        assert!(!has_docx_extension("report.docx.pdf"));
        assert!(!has_docx_extension("REPORT.DOCX"));
        assert!(!has_docx_extension(""));
    }

    #[test]
    fn test_secure_filename() {
        assert_eq!(secure_filename("My cool report.docx"), "My_cool_report.docx");
        assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename("C:\\Users\\me\\thesis.docx"), "C_Users_me_thesis.docx");
        assert_eq!(secure_filename("résumé.docx"), "rsum.docx");
        assert_eq!(secure_filename("  .hidden.docx"), "hidden.docx");
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name("€€€"), FALLBACK_NAME);
        assert_eq!(display_name("a b.docx"), "a_b.docx");
    }
}
