// src/tree/mod.rs
// =============================================================================
// The repository tree: node types and the builder that nests flat paths.
//
// Submodules:
// - node: RepoNode / NodeKind, the shape callers receive
// - builder: build_file_tree, flat leaves -> nested folders
// =============================================================================

mod builder;
mod node;

pub use builder::{build_file_tree, TreeError};
pub use node::{NodeKind, RepoNode, TreeStats};
