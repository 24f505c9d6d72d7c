/// Number of leading bytes inspected when sniffing for binary content.
const PROBE_BYTES: usize = 512;

/// Control characters above this fraction of the probe window mean binary.
const CONTROL_RATIO: f64 = 0.3;

/// Decide whether content must be embedded as base64 instead of a plain
/// text heredoc.
///
/// Only the first 512 bytes are inspected: any NUL byte, or a high
/// concentration of control characters other than tab, LF and CR,
/// classifies the content as binary. Empty content is text. The heuristic
/// is deliberately conservative; misreading text as binary is harmless
/// (base64 round-trips anything), while the reverse would corrupt bytes
/// inside a heredoc.
pub fn is_binary(content: &[u8]) -> bool {
    if content.is_empty() {
        return false;
    }

    let window = &content[..content.len().min(PROBE_BYTES)];
    let mut nul_count = 0usize;
    let mut control_count = 0usize;
    for &b in window {
        if b == 0 {
            nul_count += 1;
        }
        if b < 32 && b != b'\t' && b != b'\n' && b != b'\r' {
            control_count += 1;
        }
    }

    nul_count > 0 || control_count as f64 / window.len() as f64 > CONTROL_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_text() {
        assert!(!is_binary(b""));
    }

    #[test]
    fn test_plain_ascii_is_text() {
        assert!(!is_binary(b"hello world\nsecond line\ttabbed\r\n"));
    }

    #[test]
    fn test_single_nul_is_binary() {
        assert!(is_binary(b"looks like text\x00but is not"));
    }

    #[test]
    fn test_dense_control_bytes_are_binary() {
        // Over 30% of the window is control characters.
        let content: Vec<u8> = (0..100)
            .map(|i| if i % 2 == 0 { 0x01 } else { b'a' })
            .collect();
        assert!(is_binary(&content));
    }

    #[test]
    fn test_ratio_at_threshold_is_text() {
        // Exactly 30% control characters: the threshold is strict.
        let mut content = vec![b'a'; 70];
        content.extend(vec![0x01u8; 30]);
        assert!(!is_binary(&content));
    }

    #[test]
    fn test_bytes_past_window_are_ignored() {
        let mut content = vec![b'a'; PROBE_BYTES];
        let before = is_binary(&content);

        content.extend(vec![0u8; 64]);
        assert_eq!(is_binary(&content), before);
        assert!(!is_binary(&content), "NULs after byte 512 must not matter");
    }
}
