use ignore::{Walk, WalkBuilder};
use std::path::Path;

/// Plain recursive walk over a subtree: no ignore rules, no hidden-file
/// filtering, symlinks left unfollowed. Entries are sorted by file name so
/// two runs over the same tree produce identical output.
///
/// The walk is depth-first and yields a directory before its contents,
/// which is what lets the emitter write `mkdir -p` lines ahead of any path
/// inside that directory.
pub fn subtree(root: &Path) -> Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .ignore(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder.build()
}
