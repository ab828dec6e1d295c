use crate::vfs::VirtualFS;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Build the directory tree from the VFS entries, returning the root node.
fn build_tree(vfs: &VirtualFS, destination: &Path) -> Rc<RefCell<TreeNode>> {
    // root node represents the base directory of the run
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    // map relative path to node, the root being the empty path
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    for entry in &vfs.entries {
        let rel_path = &entry.destination;

        let Some(parent_path) = rel_path.parent() else {
            continue;
        };

        let Some(parent_node) = lookup.get(parent_path).map(Rc::clone) else {
            log::debug!(
                "parent: {}, not found for path: {}",
                parent_path.display(),
                rel_path.display()
            );
            continue;
        };

        let child_name = rel_path
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_else(|| rel_path.display().to_string());

        let new_child = Rc::new(RefCell::new(TreeNode::new(child_name, entry.is_file())));

        parent_node
            .borrow_mut()
            .children
            .push(Rc::clone(&new_child));

        lookup.insert(rel_path.clone(), new_child);
    }

    root
}

/// Write the tree in ASCII style.
fn write_tree(out: &mut String, node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    let _ = writeln!(out, "{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        write_tree(out, child, &child_prefix, i == len - 1);
    }
}

/// Renders the staged layout under `destination` as a tree.
pub fn render_tree(vfs: &VirtualFS, destination: &Path) -> String {
    let tree_root = build_tree(vfs, destination);

    let mut out = String::new();

    write_tree(&mut out, &tree_root, "", true);

    out
}

pub fn print_tree(vfs: &VirtualFS, destination: &Path) {
    println!(
        "\nLegend: {} = (directory), {} = (file)\n",
        "blue".blue(),
        "green".green()
    );

    print!("{}", render_tree(vfs, destination));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{StructureSpec, BOT_STRUCTURE};

    #[test]
    fn test_render_tree_plain() {
        colored::control::set_override(false);
        let spec = StructureSpec::from_entries(&[("bot", &[("models", &["Order.js"])])]);
        let vfs = VirtualFS::plan(&spec);

        let rendered = render_tree(&vfs, Path::new("/tmp/project"));

        let expected = "\
└── project
    └── bot
        ├── models
        │   └── Order.js
        └── app.js
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_tree_lists_every_planned_entry() {
        colored::control::set_override(false);
        let vfs = VirtualFS::plan(&BOT_STRUCTURE);

        let rendered = render_tree(&vfs, Path::new("work"));

        assert_eq!(rendered.lines().count(), vfs.entries.len() + 1);
        assert!(rendered.contains("notificationService.js"));
    }
}
