use std::path::{Path, PathBuf};

/// Path of `path` relative to `root`. Every statement in the generated
/// script refers to entries by this relative form.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf())
}

/// Quote a path as a double-quoted shell word. Backslash, double quote,
/// dollar and backtick are escaped so the word survives shell expansion.
pub fn shell_quote(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for ch in raw.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to() {
        let path = PathBuf::from("/home/user/project/src/main.rs");
        let root = PathBuf::from("/home/user/project");

        assert_eq!(relative_to(&path, &root), PathBuf::from("src/main.rs"));
    }

    #[test]
    fn test_relative_to_same_path() {
        let root = PathBuf::from("/home/user/project");

        assert_eq!(relative_to(&root, &root), PathBuf::from(""));
    }

    #[test]
    fn test_shell_quote_plain() {
        assert_eq!(shell_quote(Path::new("src/main.rs")), "\"src/main.rs\"");
    }

    #[test]
    fn test_shell_quote_spaces() {
        assert_eq!(shell_quote(Path::new("my file.txt")), "\"my file.txt\"");
    }

    #[test]
    fn test_shell_quote_specials() {
        assert_eq!(
            shell_quote(Path::new("a\"b$c`d\\e")),
            "\"a\\\"b\\$c\\`d\\\\e\""
        );
    }
}
