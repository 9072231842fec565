// src/github/fetch.rs
// =============================================================================
// This module fetches a repository's file tree from the GitHub API.
//
// Strategy:
// - One GET to /repos/{owner}/{repo}/git/trees/{branch}?recursive=1
//   (lists every file of the branch in a single response)
// - Keep only blobs with a recognized code extension
// - Nest the flat paths with the tree builder
//
// Whatever goes wrong (network, HTTP status, bad JSON, path conflict), the
// caller sees the same error: "Failed to fetch repository structure". The
// real cause stays attached as the error's source for logs and diagnostics.
//
// No retries, no caching: exactly one request per call.
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::listing::TreeListing;
use crate::tree::{build_file_tree, RepoNode, TreeError};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_BRANCH: &str = "main";

// GitHub rejects API requests without a User-Agent
const USER_AGENT: &str = concat!("repo-graph/", env!("CARGO_PKG_VERSION"));

/// The underlying reason a fetch failed.
#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("API URL cannot be used as a base: {0}")]
    BaseUrl(String),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("GitHub returned HTTP {0}")]
    Status(StatusCode),

    #[error("malformed tree listing: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// The single error kind callers see.
///
/// Its message never changes; use `cause()` or `source()` for the details.
#[derive(Debug, Error)]
#[error("Failed to fetch repository structure")]
pub struct FetchError {
    #[source]
    cause: FetchCause,
}

impl FetchError {
    pub fn cause(&self) -> &FetchCause {
        &self.cause
    }
}

impl From<FetchCause> for FetchError {
    fn from(cause: FetchCause) -> Self {
        debug!(error = %cause, "repository fetch failed");
        FetchError { cause }
    }
}

/// Where and how to ask GitHub.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// API root (e.g. "https://api.github.com" or "https://host/api/v3")
    pub api_url: String,
    pub branch: String,
    /// Sent as a bearer token when present; raises the rate limit
    pub token: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            api_url: DEFAULT_API_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            token: None,
        }
    }
}

/// A reusable GitHub client. Cloning it is cheap and shares the connection
/// pool, so several repositories can be fetched at once.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    options: FetchOptions,
}

impl GithubClient {
    pub fn new(options: FetchOptions) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchCause::Client)?;

        Ok(GithubClient { http, options })
    }

    /// Fetches the code-file tree of `owner/repo` on the configured branch.
    ///
    /// Returns the top-level entries; folders hold their children.
    pub async fn fetch_repo_structure(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<RepoNode>, FetchError> {
        let tree = self.try_fetch(owner, repo).await?;
        Ok(tree)
    }

    async fn try_fetch(&self, owner: &str, repo: &str) -> Result<Vec<RepoNode>, FetchCause> {
        let url = self.tree_url(owner, repo)?;
        let listing = self.fetch_listing(url).await?;

        if listing.truncated {
            warn!(owner, repo, "GitHub truncated the tree listing; some files are missing");
        }

        let files = listing.code_files();
        info!(
            owner,
            repo,
            listed = listing.tree.len(),
            kept = files.len(),
            "filtered tree listing to code files"
        );

        Ok(build_file_tree(files)?)
    }

    // {api}/repos/{owner}/{repo}/git/trees/{branch}?recursive=1
    // Each segment is percent-encoded; a branch like "feature/x" keeps its '/'.
    fn tree_url(&self, owner: &str, repo: &str) -> Result<Url, FetchCause> {
        let mut url = Url::parse(&self.options.api_url)?;
        url.path_segments_mut()
            .map_err(|()| FetchCause::BaseUrl(self.options.api_url.clone()))?
            .pop_if_empty()
            .extend(["repos", owner, repo, "git", "trees"])
            .extend(self.options.branch.split('/'));
        url.set_query(None);
        url.set_fragment(None);
        url.query_pairs_mut().append_pair("recursive", "1");
        Ok(url)
    }

    async fn fetch_listing(&self, url: Url) -> Result<TreeListing, FetchCause> {
        debug!(%url, "requesting tree listing");

        let mut request = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.options.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(FetchCause::Http)?;

        let status = response.status();
        debug!(%status, "GitHub responded");
        if !status.is_success() {
            return Err(FetchCause::Status(status));
        }

        // Read the body first so JSON errors are reported as Decode, not Http
        let body = response.bytes().await.map_err(FetchCause::Http)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Fetches the code-file tree of `owner/repo` from branch "main" on
/// api.github.com, without authentication.
pub async fn fetch_repo_structure(owner: &str, repo: &str) -> Result<Vec<RepoNode>, FetchError> {
    let client = GithubClient::new(FetchOptions::default())?;
    client.fetch_repo_structure(owner, repo).await
}
