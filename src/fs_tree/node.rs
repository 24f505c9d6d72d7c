use std::collections::HashMap;

/// One entry in the preview tree.
///
/// Children keep insertion order while the tree is being built; the
/// renderer sorts them in place just before printing. The tree is built
/// once, rendered once and discarded.
#[derive(Debug)]
pub struct Node {
    pub name: String,
    pub is_dir: bool,
    pub children: Vec<Node>,
    // name -> index into children, so sibling lookup stays cheap at high
    // fan-out. Stale once the renderer sorts the children.
    child_index: HashMap<String, usize>,
}

impl Node {
    pub fn new(name: String, is_dir: bool) -> Self {
        Self {
            name,
            is_dir,
            children: Vec::new(),
            child_index: HashMap::new(),
        }
    }

    /// Find the child named `name`, creating it when absent. A path
    /// component seen twice resolves to the same node; an existing node
    /// never loses its directory flag.
    pub fn child_entry(&mut self, name: &str, is_dir: bool) -> &mut Node {
        let idx = match self.child_index.get(name) {
            Some(&idx) => {
                if is_dir {
                    self.children[idx].is_dir = true;
                }
                idx
            }
            None => {
                let idx = self.children.len();
                self.children.push(Node::new(name.to_string(), is_dir));
                self.child_index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.children[idx]
    }

    /// Directories first, then files, lexicographic within each group.
    pub fn sort_children(&mut self) {
        self.children
            .sort_by(|a, b| match (a.is_dir, b.is_dir) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.name.cmp(&b.name),
            });
    }
}
