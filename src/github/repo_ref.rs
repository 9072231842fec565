// src/github/repo_ref.rs
// =============================================================================
// Parses the repository arguments given on the command line.
//
// Supported formats:
//   - owner/repo
//   - github.com/owner/repo
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
// =============================================================================

use anyhow::{anyhow, Result};
use std::fmt;

/// An owner/name pair identifying one GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Parses a repository argument into owner and repo.
///
/// Example:
///   "https://github.com/rust-lang/rust" -> rust-lang / rust
pub fn parse_repo_arg(arg: &str) -> Result<RepoRef> {
    // Drop any ?query or #fragment from a pasted browser URL
    let without_query = arg.trim().split(['?', '#']).next().unwrap_or_default();

    // Remove common prefixes
    let trimmed = without_query
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");

    // Anything with a host must be github.com; a bare "owner/repo" is fine too
    let path = match trimmed.strip_prefix("github.com/") {
        Some(path) => path,
        None if trimmed.contains('.') && trimmed.split('/').count() > 2 => {
            return Err(anyhow!("Not a GitHub URL: {}", arg));
        }
        None => trimmed,
    };

    let parts: Vec<&str> = path.trim_end_matches('/').split('/').collect();
    if parts.len() < 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(anyhow!("Invalid repository '{}': expected owner/repo", arg));
    }

    let owner = parts[0].to_string();
    let repo = parts[1].trim_end_matches(".git").to_string();

    if repo.is_empty() {
        return Err(anyhow!("Invalid repository '{}': empty repository name", arg));
    }

    Ok(RepoRef { owner, repo })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_repo() {
        let r = parse_repo_arg("vuejs/core").unwrap();
        assert_eq!(r.owner, "vuejs");
        assert_eq!(r.repo, "core");
        assert_eq!(r.to_string(), "vuejs/core");
    }

    #[test]
    fn test_parse_github_url() {
        let r = parse_repo_arg("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(r.owner, "rust-lang");
        assert_eq!(r.repo, "rust");
    }

    #[test]
    fn test_parse_github_url_with_git() {
        let r = parse_repo_arg("https://github.com/user/repo.git").unwrap();
        assert_eq!(r.owner, "user");
        assert_eq!(r.repo, "repo");
    }

    #[test]
    fn test_parse_url_with_extra_path() {
        let r = parse_repo_arg("github.com/user/repo/tree/main/src").unwrap();
        assert_eq!(r, RepoRef { owner: "user".to_string(), repo: "repo".to_string() });
    }

    #[test]
    fn test_parse_url_with_fragment() {
        let r = parse_repo_arg("https://github.com/vuejs/core#readme").unwrap();
        assert_eq!(r, RepoRef { owner: "vuejs".to_string(), repo: "core".to_string() });
    }

    #[test]
    fn test_parse_url_with_query() {
        let r = parse_repo_arg("https://github.com/vuejs/core?tab=readme-ov-file").unwrap();
        assert_eq!(r, RepoRef { owner: "vuejs".to_string(), repo: "core".to_string() });

        let r = parse_repo_arg("github.com/vuejs/core.git?x=1#top").unwrap();
        assert_eq!(r.repo, "core");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_repo_arg("https://gitlab.com/user/repo").is_err());
        assert!(parse_repo_arg("just-a-name").is_err());
        assert!(parse_repo_arg("owner/").is_err());
    }
}
