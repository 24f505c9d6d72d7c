use std::fs::Metadata;

/// Directories created by `mkdir -p` default to these bits; no chmod line
/// is emitted when the source matches.
pub const DEFAULT_DIR_MODE: u32 = 0o755;
/// Same convention for files created by `touch`.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Permission bits of an entry, masked to the rwx bits.
#[cfg(unix)]
pub fn permission_bits(metadata: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode() & 0o777)
}

/// Non-Unix targets have no mode bits to preserve; the generated script
/// leaves permissions to the shell defaults.
#[cfg(not(unix))]
pub fn permission_bits(_metadata: &Metadata) -> Option<u32> {
    None
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    #[test]
    fn test_permission_bits_masked() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.sh");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o700)).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        assert_eq!(permission_bits(&metadata), Some(0o700));
    }

    #[test]
    fn test_permission_bits_ignore_file_type() {
        let temp_dir = TempDir::new().unwrap();
        let metadata = fs::metadata(temp_dir.path()).unwrap();

        // Directory type bits must not leak into the permission mask.
        let bits = permission_bits(&metadata).unwrap();
        assert!(bits <= 0o777);
    }
}
