use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Build the heredoc delimiter for a file, e.g. `__EOF_TXT_1700000000`.
///
/// The tag is the upper-cased extension (dot stripped) or, when there is
/// none, the upper-cased base name; the suffix is the file's modification
/// time as a Unix timestamp. Characters that are not ASCII alphanumerics
/// are mapped to `_` so the marker is always a single shell word. This is
/// a heuristic, not a collision-proof guarantee, but the marker cannot
/// plausibly appear verbatim inside typical file content.
pub fn delimiter(path: &Path, modified: SystemTime) -> String {
    let tag = path
        .extension()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let tag: String = tag
        .trim_start_matches('.')
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    let timestamp = modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    format!("__EOF_{}_{}", tag, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn mtime(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_delimiter_from_extension() {
        let d = delimiter(Path::new("notes.txt"), mtime(1_700_000_000));
        assert_eq!(d, "__EOF_TXT_1700000000");
    }

    #[test]
    fn test_delimiter_without_extension_uses_base_name() {
        let d = delimiter(Path::new("Makefile"), mtime(42));
        assert_eq!(d, "__EOF_MAKEFILE_42");
    }

    #[test]
    fn test_delimiter_hidden_file() {
        let d = delimiter(Path::new(".bashrc"), mtime(7));
        assert_eq!(d, "__EOF_BASHRC_7");
    }

    #[test]
    fn test_delimiter_sanitizes_non_alphanumerics() {
        let d = delimiter(Path::new("my file"), mtime(1));
        assert_eq!(d, "__EOF_MY_FILE_1");
    }

    #[test]
    fn test_delimiter_last_extension_wins() {
        let d = delimiter(Path::new("archive.tar.gz"), mtime(9));
        assert_eq!(d, "__EOF_GZ_9");
    }
}
