// src/lib.rs
// =============================================================================
// Library half of repo-graph. The binary (src/main.rs) is a thin CLI over it.
//
// Pipeline:
//   github::fetch_repo_structure  (one GET to the GitHub trees API)
//     -> classify::is_code_file   (keep recognized code files only)
//     -> tree::build_file_tree    (flat paths -> nested folders)
//     -> graph::GraphData         (optional: nodes + links for a renderer)
// =============================================================================

pub mod classify;
pub mod github;
pub mod graph;
pub mod tree;

pub use github::{fetch_repo_structure, FetchError};
pub use tree::{NodeKind, RepoNode};
