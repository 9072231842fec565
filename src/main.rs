// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr, filtered by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Fetch every requested repository concurrently
// 4. Print each tree in the chosen format
// 5. Exit with proper code (0 = success, 1 = a fetch failed, 2 = error)
// =============================================================================

mod cli;

use std::error::Error as _;

use anyhow::Result;
use clap::Parser;
use futures::stream::{self, StreamExt};
use serde_json::{Map, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, OutputFormat};
use repo_graph::classify::category_of;
use repo_graph::github::{parse_repo_arg, FetchError, FetchOptions, GithubClient, RepoRef};
use repo_graph::graph::GraphData;
use repo_graph::tree::{RepoNode, TreeStats};

// How many repositories are fetched at the same time
const MAX_CONCURRENT_FETCHES: usize = 4;

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// Returns:
//   Ok(0) = every repository fetched
//   Ok(1) = at least one fetch failed
//   Err   = bad arguments or unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let repos = cli
        .repos
        .iter()
        .map(|arg| parse_repo_arg(arg))
        .collect::<Result<Vec<_>>>()?;

    let client = GithubClient::new(FetchOptions {
        api_url: cli.api_url.clone(),
        branch: cli.branch.clone(),
        token: cli.token.clone(),
    })?;

    // Each fetch is independent; `buffered` keeps results in argument order
    let results: Vec<(RepoRef, Result<Vec<RepoNode>, FetchError>)> = stream::iter(repos)
        .map(|repo_ref| {
            let client = client.clone();
            async move {
                let result = client
                    .fetch_repo_structure(&repo_ref.owner, &repo_ref.repo)
                    .await;
                (repo_ref, result)
            }
        })
        .buffered(MAX_CONCURRENT_FETCHES)
        .collect()
        .await;

    // Failed repositories stay in the list (as None) so the JSON shape only
    // depends on what was requested
    let mut outcomes = Vec::new();
    let mut failed = 0;
    for (repo_ref, result) in results {
        match result {
            Ok(tree) => outcomes.push((repo_ref, Some(tree))),
            Err(e) => {
                failed += 1;
                eprintln!("❌ {}: {}", repo_ref, describe_error(&e));
                outcomes.push((repo_ref, None));
            }
        }
    }

    print_results(&outcomes, cli.format, &cli.branch)?;

    if failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

// "Failed to fetch repository structure: GitHub returned HTTP 404 Not Found"
fn describe_error(error: &FetchError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

// One fetched tree per requested repository, None when its fetch failed
type Outcome = (RepoRef, Option<Vec<RepoNode>>);

fn print_results(outcomes: &[Outcome], format: OutputFormat, branch: &str) -> Result<()> {
    let output = match format {
        OutputFormat::Tree => {
            for (repo_ref, tree) in outcomes {
                if let Some(tree) = tree {
                    print_tree(repo_ref, tree, branch);
                }
            }
            return Ok(());
        }
        OutputFormat::Json => json_output(outcomes, |tree| serde_json::to_value(tree))?,
        OutputFormat::Graph => {
            json_output(outcomes, |tree| serde_json::to_value(GraphData::from_tree(tree)))?
        }
    };

    if let Some(output) = output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

// A single requested repository prints its bare value (nothing if it
// failed). Several print an object keyed by "owner/repo" with one entry per
// requested repository; failed ones are null.
fn json_output<F>(outcomes: &[Outcome], to_value: F) -> serde_json::Result<Option<Value>>
where
    F: Fn(&[RepoNode]) -> serde_json::Result<Value>,
{
    match outcomes {
        [(_, tree)] => tree.as_deref().map(&to_value).transpose(),
        _ => {
            let mut map = Map::new();
            for (repo_ref, tree) in outcomes {
                let value = match tree {
                    Some(tree) => to_value(tree.as_slice())?,
                    None => Value::Null,
                };
                map.insert(repo_ref.to_string(), value);
            }
            Ok(Some(Value::Object(map)))
        }
    }
}

fn print_tree(repo_ref: &RepoRef, tree: &[RepoNode], branch: &str) {
    println!("📦 {} ({})", repo_ref, branch);
    print_level(tree, "");

    let stats = TreeStats::of(tree);
    println!();
    println!("📊 {} code file(s) in {} folder(s)", stats.files, stats.folders);
    println!();
}

fn print_level(nodes: &[RepoNode], prefix: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let branch = if last { "└── " } else { "├── " };

        if node.is_folder() {
            println!("{}{}{}/", prefix, branch, node.name);
            let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
            print_level(node.children(), &child_prefix);
        } else {
            let category = node
                .extension
                .as_deref()
                .and_then(category_of)
                .map(|c| c.label())
                .unwrap_or("other");
            println!("{}{}{}  [{} {}]", prefix, branch, node.name, category, node.color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> RepoRef {
        parse_repo_arg(name).unwrap()
    }

    fn tree_json(tree: &[RepoNode]) -> serde_json::Result<Value> {
        serde_json::to_value(tree)
    }

    #[test]
    fn test_single_repo_prints_bare_tree() {
        let outcomes = vec![(repo("a/b"), Some(vec![RepoNode::file("x.ts")]))];

        let output = json_output(&outcomes, tree_json).unwrap().unwrap();
        assert!(output.is_array());
        assert_eq!(output[0]["id"], "x.ts");
    }

    #[test]
    fn test_single_failed_repo_prints_nothing() {
        let outcomes = vec![(repo("a/b"), None)];
        assert!(json_output(&outcomes, tree_json).unwrap().is_none());
    }

    #[test]
    fn test_partial_failure_keeps_keyed_shape() {
        let outcomes = vec![
            (repo("a/b"), Some(vec![RepoNode::file("x.ts")])),
            (repo("c/d"), None),
        ];

        let output = json_output(&outcomes, tree_json).unwrap().unwrap();
        let map = output.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a/b"][0]["id"], "x.ts");
        assert!(map["c/d"].is_null());
    }

    #[test]
    fn test_graph_output_keyed_by_repo() {
        let outcomes = vec![
            (repo("a/b"), Some(vec![RepoNode::file("x.ts")])),
            (repo("c/d"), Some(Vec::new())),
        ];

        let output = json_output(&outcomes, |tree| {
            serde_json::to_value(GraphData::from_tree(tree))
        })
        .unwrap()
        .unwrap();
        assert_eq!(output["a/b"]["nodes"][0]["color"], "#3178C6");
        assert!(output["c/d"]["nodes"].as_array().unwrap().is_empty());
    }
}
