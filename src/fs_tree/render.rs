use super::node::Node;

/// Render the preview listing: the glyph tree followed by the
/// `N directories, M files` trailer. Sorting happens in place while
/// rendering; the tree is single-use.
pub fn render(root: &mut Node) -> String {
    let mut out = String::new();
    render_node(root, "", true, &mut out);

    let (dirs, files) = count_items(root);
    // The root itself is not counted as a directory.
    out.push_str(&format!(
        "\n{} directories, {} files\n",
        dirs.saturating_sub(1),
        files
    ));
    out
}

fn render_node(node: &mut Node, prefix: &str, is_last: bool, out: &mut String) {
    node.sort_children();

    if prefix.is_empty() {
        out.push_str(&node.name);
        out.push_str("/\n");
    } else {
        out.push_str(prefix);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(&node.name);
        if node.is_dir {
            out.push('/');
        }
        out.push('\n');
    }

    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
    let count = node.children.len();
    for i in 0..count {
        render_node(&mut node.children[i], &child_prefix, i + 1 == count, out);
    }
}

fn count_items(node: &Node) -> (usize, usize) {
    let (mut dirs, mut files) = if node.is_dir { (1, 0) } else { (0, 1) };
    for child in &node.children {
        let (d, f) = count_items(child);
        dirs += d;
        files += f;
    }
    (dirs, files)
}
