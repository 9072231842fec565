// src/tree/node.rs
// =============================================================================
// The shape handed to callers: a file or a folder, where folders carry an
// ordered list of children.
//
// JSON shape (field names match what the graph renderer reads):
//   { "id": "src/app.ts", "name": "app.ts", "type": "file",
//     "extension": ".ts", "path": "src/app.ts" }
//   { "id": "src", "name": "src", "type": "folder", "path": "src",
//     "children": [ ... ] }
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::classify::{extension_of, file_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// One entry of the repository tree.
///
/// `id` and `path` are both the full repository-relative path; the renderer
/// uses `id` as the node key and `path` for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RepoNode>>,
}

impl RepoNode {
    /// Creates a file leaf from its full path.
    ///
    /// name = segment after the last '/', extension = from the last '.'
    pub fn file(path: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path);
        RepoNode {
            id: path.to_string(),
            name: name.to_string(),
            kind: NodeKind::File,
            extension: extension_of(name).map(str::to_string),
            path: path.to_string(),
            children: None,
        }
    }

    pub(crate) fn folder(id: String, name: String, children: Vec<RepoNode>) -> Self {
        RepoNode {
            path: id.clone(),
            id,
            name,
            kind: NodeKind::Folder,
            extension: None,
            children: Some(children),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Children of a folder; empty for files.
    pub fn children(&self) -> &[RepoNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn color(&self) -> &'static str {
        file_color(self.kind, self.extension.as_deref())
    }
}

/// Totals over a whole tree, used for the CLI summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub files: usize,
    pub folders: usize,
}

impl TreeStats {
    pub fn of(nodes: &[RepoNode]) -> Self {
        let mut stats = TreeStats::default();
        for node in nodes {
            if node.is_folder() {
                stats.folders += 1;
                let inner = TreeStats::of(node.children());
                stats.files += inner.files;
                stats.folders += inner.folders;
            } else {
                stats.files += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_leaf_fields() {
        let node = RepoNode::file("src/components/Button.vue");
        assert_eq!(node.id, "src/components/Button.vue");
        assert_eq!(node.path, "src/components/Button.vue");
        assert_eq!(node.name, "Button.vue");
        assert_eq!(node.kind, NodeKind::File);
        assert_eq!(node.extension.as_deref(), Some(".vue"));
        assert!(node.children.is_none());
        assert_eq!(node.color(), "#41B883");
    }

    #[test]
    fn test_top_level_file_name_is_path() {
        let node = RepoNode::file("index.html");
        assert_eq!(node.name, "index.html");
        assert_eq!(node.id, "index.html");
    }

    #[test]
    fn test_json_shape() {
        let folder = RepoNode::folder(
            "src".to_string(),
            "src".to_string(),
            vec![RepoNode::file("src/app.ts")],
        );
        let value = serde_json::to_value(&folder).unwrap();

        assert_eq!(value["type"], "folder");
        assert!(value.get("extension").is_none());
        assert_eq!(value["children"][0]["type"], "file");
        assert_eq!(value["children"][0]["extension"], ".ts");
        assert!(value["children"][0].get("children").is_none());
    }

    #[test]
    fn test_stats_counts_nested_entries() {
        let tree = vec![
            RepoNode::folder(
                "a".to_string(),
                "a".to_string(),
                vec![
                    RepoNode::file("a/b.ts"),
                    RepoNode::folder(
                        "a/c".to_string(),
                        "c".to_string(),
                        vec![RepoNode::file("a/c/d.js")],
                    ),
                ],
            ),
            RepoNode::file("e.css"),
        ];
        assert_eq!(TreeStats::of(&tree), TreeStats { files: 3, folders: 2 });
    }
}
