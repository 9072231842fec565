// src/github/listing.rs
// =============================================================================
// The JSON shape returned by GitHub's git/trees endpoint, and the filter that
// turns it into file leaves for the tree builder.
//
// Example response (trimmed):
//   {
//     "sha": "9fb037...",
//     "tree": [
//       { "path": "src",        "type": "tree", ... },
//       { "path": "src/app.ts", "type": "blob", "size": 120, ... }
//     ],
//     "truncated": false
//   }
//
// Only "path" and "type" matter here; everything else is ignored by serde.
// =============================================================================

use serde::Deserialize;

use crate::classify::is_code_file;
use crate::tree::RepoNode;

#[derive(Debug, Clone, Deserialize)]
pub struct TreeListing {
    pub tree: Vec<TreeItem>,
    /// GitHub sets this when the listing was cut off for being too large
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeItem {
    pub path: String,
    /// "blob" (file), "tree" (directory) or "commit" (submodule)
    #[serde(rename = "type")]
    pub kind: String,
}

impl TreeItem {
    pub fn is_blob(&self) -> bool {
        self.kind == "blob"
    }
}

impl TreeListing {
    /// Keeps the blobs whose extension is a recognized code extension and
    /// maps each one to a file leaf, preserving listing order.
    pub fn code_files(&self) -> Vec<RepoNode> {
        self.tree
            .iter()
            .filter(|item| item.is_blob() && is_code_file(&item.path))
            .map(|item| RepoNode::file(&item.path))
            .collect()
    }
}
