use crate::errors::AppError;
use crate::fs_tree;
use crate::script::classify::is_binary;
use crate::script::heredoc;
use crate::util::mode::{permission_bits, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
use crate::util::path::{relative_to, shell_quote};
use crate::walk;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Streams a POSIX shell script that recreates a directory subtree.
///
/// The emitter walks the filesystem once in pre-order and writes one
/// statement group per entry; nothing is buffered across entries. The
/// optional tree preview comes from a second, independent walk.
pub struct ScriptEmitter {
    version: String,
}

impl ScriptEmitter {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
        }
    }

    /// Write the whole recreation script for `input_dir` to `out`.
    ///
    /// Any walk, read or write failure aborts immediately; the script
    /// written so far is left as-is on the sink.
    pub fn emit<W: Write>(
        &self,
        input_dir: &Path,
        out: &mut W,
        with_tree: bool,
    ) -> Result<(), AppError> {
        write!(
            out,
            "#!/bin/sh\n# built using shellbale version {}\n\n",
            self.version
        )?;

        if with_tree {
            let mut tree = fs_tree::build_tree(input_dir)?;
            let listing = fs_tree::render(&mut tree);
            // A no-op heredoc keeps the preview readable without the shell
            // interpreting any of it.
            write!(out, "cat << \\__TREE > /dev/null\n{}__TREE\n\n", listing)?;
        }

        for entry in walk::subtree(input_dir) {
            let entry = entry?;
            let path = entry.path();

            // The root itself is never part of the script.
            if path == input_dir {
                continue;
            }
            if entry.file_type().map(|ft| ft.is_symlink()).unwrap_or(false) {
                continue;
            }

            let metadata = entry.metadata()?;
            let rel = relative_to(path, input_dir);

            if metadata.is_dir() {
                write!(out, "\nmkdir -p {}", shell_quote(&rel))?;
                if let Some(mode) = permission_bits(&metadata) {
                    if mode != DEFAULT_DIR_MODE {
                        write!(out, "\nchmod {:o} {}", mode, shell_quote(&rel))?;
                    }
                }
            } else {
                self.emit_file(out, path, &rel, &metadata)?;
            }
        }

        Ok(())
    }

    fn emit_file<W: Write>(
        &self,
        out: &mut W,
        path: &Path,
        rel: &Path,
        metadata: &fs::Metadata,
    ) -> Result<(), AppError> {
        let modified = metadata.modified().map_err(|e| AppError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let delimiter = heredoc::delimiter(rel, modified);

        write!(out, "\n\nFILEPATH={}\n", shell_quote(rel))?;
        out.write_all(b"touch \"$FILEPATH\"\n")?;
        if let Some(mode) = permission_bits(metadata) {
            if mode != DEFAULT_FILE_MODE {
                write!(out, "chmod {:o} \"$FILEPATH\"\n", mode)?;
            }
        }

        let content = fs::read(path).map_err(|e| AppError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        // An empty heredoc body would be ambiguous with the closing
        // delimiter; touch already created the file.
        if content.is_empty() {
            return Ok(());
        }

        if is_binary(&content) {
            let digest = Sha256::digest(&content);
            writeln!(out, "EXPECTED_HASH={}", hex::encode(digest))?;
            writeln!(out, "cat <<\\{} | base64 -d > \"$FILEPATH\"", delimiter)?;
            out.write_all(BASE64.encode(&content).as_bytes())?;
            write!(out, "\n{}\n", delimiter)?;
            out.write_all(b"COMPUTED_HASH=$(sha256sum \"$FILEPATH\" | cut -d' ' -f1)\n")?;
            out.write_all(b"if [ \"$COMPUTED_HASH\" != \"$EXPECTED_HASH\" ]; then\n")?;
            out.write_all(b"    echo \"Hash does not match for $FILEPATH!\"\n")?;
            out.write_all(b"fi\n")?;
        } else {
            // The backslash before the delimiter disables interpolation
            // inside the heredoc, so content is reproduced byte-for-byte.
            writeln!(out, "cat <<\\{} > \"$FILEPATH\"", delimiter)?;
            out.write_all(&content)?;
            if content.last() != Some(&b'\n') {
                out.write_all(b"\n")?;
            }
            writeln!(out, "{}", delimiter)?;
        }

        Ok(())
    }
}
