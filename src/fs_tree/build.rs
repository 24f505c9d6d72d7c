use super::node::Node;
use crate::errors::AppError;
use crate::util::path::relative_to;
use crate::walk;
use std::fs;
use std::path::{Component, Path};

/// Build the preview tree by walking the whole subtree once.
///
/// Any walk error is fatal; a partial tree is never returned. Symlinks are
/// skipped so the preview agrees with what the emitter recreates.
pub fn build_tree(root: &Path) -> Result<Node, AppError> {
    fs::metadata(root).map_err(|e| AppError::InputDir {
        path: root.to_path_buf(),
        source: e,
    })?;

    let name = root
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("."))
        .to_string_lossy()
        .to_string();
    let mut root_node = Node::new(name, true);

    for entry in walk::subtree(root) {
        let entry = entry?;
        let path = entry.path();

        if path == root {
            continue;
        }
        if entry.file_type().map(|ft| ft.is_symlink()).unwrap_or(false) {
            continue;
        }

        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        let rel = relative_to(path, root);
        insert_path(&mut root_node, &rel, is_dir);
    }

    Ok(root_node)
}

/// Insert every segment of `rel` under `root`, creating implied ancestor
/// nodes on demand. Only the final segment takes its kind from the
/// filesystem; ancestors are always directories.
pub fn insert_path(root: &mut Node, rel: &Path, is_dir: bool) {
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        return;
    }

    let last = parts.len() - 1;
    let mut current = root;
    for (i, part) in parts.iter().enumerate() {
        current = current.child_entry(part, i != last || is_dir);
    }
}
