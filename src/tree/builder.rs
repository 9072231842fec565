// src/tree/builder.rs
// =============================================================================
// Turns a flat list of file leaves ("a/b.ts", "a/c.js", "d.css") into a
// nested tree of folders and files.
//
// How it works:
// 1. Start with an empty root level
// 2. Split each path on '/'
// 3. Every segment but the last walks into a folder, creating it if needed
// 4. The last segment places the leaf itself
// 5. At the end, convert every level into a plain Vec<RepoNode>
//
// Each level remembers the order in which names first appeared, so the
// output order is insertion order, not alphabetical.
// =============================================================================

use std::collections::HashMap;

use thiserror::Error;

use super::node::RepoNode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// One path uses this prefix as a file, another as a folder.
    #[error("path conflict: '{0}' is both a file and a folder")]
    PathConflict(String),

    #[error("invalid path: '{0}'")]
    InvalidPath(String),
}

// A slot at one level: either a finished leaf or a folder still being filled
#[derive(Debug)]
enum Slot {
    Leaf(RepoNode),
    Folder { id: String, name: String, level: Level },
}

// Insertion-ordered map from name to slot
#[derive(Debug, Default)]
struct Level {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl Level {
    // Returns the folder level for `name`, creating the folder if absent.
    fn folder_mut(&mut self, name: &str, id: &str) -> Result<&mut Level, TreeError> {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.slots.push(Slot::Folder {
                    id: id.to_string(),
                    name: name.to_string(),
                    level: Level::default(),
                });
                let idx = self.slots.len() - 1;
                self.index.insert(name.to_string(), idx);
                idx
            }
        };

        match &mut self.slots[idx] {
            Slot::Folder { level, .. } => Ok(level),
            Slot::Leaf(_) => Err(TreeError::PathConflict(id.to_string())),
        }
    }

    // Places a leaf. A repeated file path replaces the earlier leaf in place.
    fn insert_leaf(&mut self, name: &str, leaf: RepoNode) -> Result<(), TreeError> {
        match self.index.get(name) {
            Some(&idx) => match &mut self.slots[idx] {
                Slot::Leaf(existing) => {
                    *existing = leaf;
                    Ok(())
                }
                Slot::Folder { id, .. } => Err(TreeError::PathConflict(id.clone())),
            },
            None => {
                self.index.insert(name.to_string(), self.slots.len());
                self.slots.push(Slot::Leaf(leaf));
                Ok(())
            }
        }
    }

    fn into_nodes(self) -> Vec<RepoNode> {
        self.slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Leaf(node) => node,
                Slot::Folder { id, name, level } => RepoNode::folder(id, name, level.into_nodes()),
            })
            .collect()
    }
}

/// Builds the nested tree from flat file leaves.
///
/// Each leaf's `path` decides where it goes; intermediate folders are
/// created on demand with `id` = the '/'-joined prefix and no extension.
///
/// Returns the top-level entries in first-appearance order.
///
/// Errors:
///   PathConflict if a prefix is needed as a folder but was given as a file
///   (or the other way round); InvalidPath for empty segments.
pub fn build_file_tree(files: Vec<RepoNode>) -> Result<Vec<RepoNode>, TreeError> {
    let mut root = Level::default();

    for file in files {
        let path = file.path.clone();
        let parts: Vec<&str> = path.split('/').collect();

        if parts.iter().any(|part| part.is_empty()) {
            return Err(TreeError::InvalidPath(path.clone()));
        }

        let (leaf_name, folders) = match parts.split_last() {
            Some(split) => split,
            None => return Err(TreeError::InvalidPath(path.clone())),
        };

        let mut current = &mut root;
        for (depth, part) in folders.iter().enumerate() {
            let id = parts[..=depth].join("/");
            current = current.folder_mut(part, &id)?;
        }

        current.insert_leaf(leaf_name, file)?;
    }

    Ok(root.into_nodes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    fn leaves(paths: &[&str]) -> Vec<RepoNode> {
        paths.iter().map(|p| RepoNode::file(p)).collect()
    }

    #[test]
    fn test_groups_files_under_folders() {
        let tree = build_file_tree(leaves(&["a/b.ts", "a/c.js", "d.css"])).unwrap();

        assert_eq!(tree.len(), 2);

        let a = &tree[0];
        assert_eq!(a.id, "a");
        assert_eq!(a.name, "a");
        assert_eq!(a.kind, NodeKind::Folder);
        let names: Vec<&str> = a.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b.ts", "c.js"]);
        assert_eq!(a.children()[0].id, "a/b.ts");
        assert_eq!(a.children()[1].id, "a/c.js");

        let d = &tree[1];
        assert_eq!(d.id, "d.css");
        assert_eq!(d.kind, NodeKind::File);
        assert!(d.children.is_none());
    }

    #[test]
    fn test_creates_intermediate_folders() {
        let tree = build_file_tree(leaves(&["x/y/z.vue"])).unwrap();

        assert_eq!(tree.len(), 1);
        let x = &tree[0];
        assert_eq!(x.id, "x");
        assert_eq!(x.kind, NodeKind::Folder);
        assert!(x.extension.is_none());

        let y = &x.children()[0];
        assert_eq!(y.id, "x/y");
        assert_eq!(y.path, "x/y");
        assert_eq!(y.name, "y");
        assert!(y.extension.is_none());

        let z = &y.children()[0];
        assert_eq!(z.id, "x/y/z.vue");
        assert_eq!(z.kind, NodeKind::File);
        assert_eq!(z.extension.as_deref(), Some(".vue"));
    }

    #[test]
    fn test_keeps_first_appearance_order() {
        let tree = build_file_tree(leaves(&["z.ts", "m/a.ts", "b.ts", "m/0.ts"])).unwrap();

        let top: Vec<&str> = tree.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(top, vec!["z.ts", "m", "b.ts"]);

        let inner: Vec<&str> = tree[1].children().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(inner, vec!["m/a.ts", "m/0.ts"]);
    }

    #[test]
    fn test_empty_input_gives_empty_tree() {
        assert!(build_file_tree(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_file_then_folder_conflict() {
        let result = build_file_tree(leaves(&["a", "a/b.ts"]));
        assert_eq!(result, Err(TreeError::PathConflict("a".to_string())));
    }

    #[test]
    fn test_folder_then_file_conflict() {
        let result = build_file_tree(leaves(&["src/lib/x.ts", "src/lib"]));
        assert_eq!(result, Err(TreeError::PathConflict("src/lib".to_string())));
    }

    #[test]
    fn test_duplicate_file_replaced_in_place() {
        let tree = build_file_tree(leaves(&["a.ts", "b.ts", "a.ts"])).unwrap();
        let top: Vec<&str> = tree.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(top, vec!["a.ts", "b.ts"]);
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert!(matches!(
            build_file_tree(leaves(&["a//b.ts"])),
            Err(TreeError::InvalidPath(_))
        ));
        assert!(matches!(
            build_file_tree(leaves(&["/a.ts"])),
            Err(TreeError::InvalidPath(_))
        ));
    }
}
