//! Directory-tree rendering for the matched file list.

use std::collections::BTreeMap;

pub const TREE_HEADER: &str = "Directory Structure:\n\n";
pub const NO_FILES_MATCHED: &str = "No files matched the criteria.\n\n";

const ROOT_NAME: &str = "./";
const TEE: &str = "├── ";
const CORNER: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

#[derive(Debug, Default)]
struct TreeNode {
    is_dir: bool,
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    fn dir() -> Self {
        Self {
            is_dir: true,
            children: BTreeMap::new(),
        }
    }

    fn insert(&mut self, path: &str) {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((file, dirs)) = segments.split_last() else {
            return;
        };
        let mut node = self;
        for dir in dirs {
            node = node
                .children
                .entry((*dir).to_string())
                .or_insert_with(TreeNode::dir);
        }
        node.children
            .entry((*file).to_string())
            .or_insert_with(TreeNode::default);
    }

    /// Children ordered directories first, then by name.
    fn sorted_children(&self) -> Vec<(&String, &TreeNode)> {
        let mut children: Vec<_> = self.children.iter().collect();
        // stable: keeps BTreeMap name order inside each group
        children.sort_by_key(|(_, node)| !node.is_dir);
        children
    }
}

/// Renders `paths` (relative, `/` or `\` separated, any order) as a tree.
///
/// Output starts with [`TREE_HEADER`] and ends with a blank line. An empty
/// input yields [`NO_FILES_MATCHED`] instead.
pub fn render_tree<S: AsRef<str>>(paths: &[S]) -> String {
    if paths.is_empty() {
        return NO_FILES_MATCHED.to_string();
    }

    let mut root = TreeNode::dir();
    for path in paths {
        root.insert(&path.as_ref().replace('\\', "/"));
    }

    let mut out = String::from(TREE_HEADER);
    out.push_str(CORNER);
    out.push_str(ROOT_NAME);
    out.push('\n');
    render_children(&root, BLANK_INDENT, &mut out);
    out.push('\n');
    out
}

fn render_children(node: &TreeNode, prefix: &str, out: &mut String) {
    let children = node.sorted_children();
    let last = children.len().saturating_sub(1);
    for (i, (name, child)) in children.into_iter().enumerate() {
        let is_last = i == last;
        out.push_str(prefix);
        out.push_str(if is_last { CORNER } else { TEE });
        out.push_str(name);
        out.push('\n');
        if child.is_dir {
            let extension = if is_last { BLANK_INDENT } else { PIPE_INDENT };
            render_children(child, &format!("{prefix}{extension}"), out);
        }
    }
}
