// src/github/mod.rs
// =============================================================================
// This module talks to GitHub.
//
// Currently implements:
// - Parsing repository arguments ("owner/repo" or a github.com URL)
// - Fetching the recursive tree listing of one branch via the REST API
// - Filtering that listing down to code files and nesting it into a tree
// =============================================================================

mod fetch;
mod listing;
mod repo_ref;

pub use fetch::{
    fetch_repo_structure, FetchCause, FetchError, FetchOptions, GithubClient, DEFAULT_API_URL,
    DEFAULT_BRANCH,
};
pub use listing::{TreeItem, TreeListing};
pub use repo_ref::{parse_repo_arg, RepoRef};
