// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Configuration comes from flags, with environment variable fallbacks for
// the token and the API URL (handy in CI):
//   GITHUB_TOKEN    -> --token
//   GITHUB_API_URL  -> --api-url
// =============================================================================

use clap::{Parser, ValueEnum};

use repo_graph::github::{DEFAULT_API_URL, DEFAULT_BRANCH};

#[derive(Parser, Debug)]
#[command(
    name = "repo-graph",
    version,
    about = "Fetch a GitHub repository's code files as a tree or graph",
    long_about = "repo-graph lists every file of a GitHub repository branch through the \
                  GitHub API, keeps the script, markup and style files, and prints them as \
                  a nested tree, as JSON, or as node/link data for a force-directed graph."
)]
pub struct Cli {
    /// Repositories to fetch (owner/repo or https://github.com/owner/repo)
    ///
    /// Example: repo-graph vuejs/core https://github.com/vitejs/vite
    #[arg(required = true, value_name = "REPO")]
    pub repos: Vec<String>,

    /// Branch whose tree is listed
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    pub format: OutputFormat,

    /// GitHub token; without one the API allows 60 requests per hour
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API root (for GitHub Enterprise or a local mock)
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented tree with categories and colors
    Tree,
    /// The nested tree as JSON
    Json,
    /// Node and link lists as JSON
    Graph,
}
