use anyhow::{Result, anyhow};
use std::str::FromStr;

/// Repository publishing the clang-format and clang-tidy wheels.
pub const DEFAULT_REPO: &str = "cpp-linter/clang-tools-wheel";

#[derive(Debug, PartialEq, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl Default for GitHubRepo {
    fn default() -> Self {
        Self {
            owner: "cpp-linter".to_string(),
            repo: "clang-tools-wheel".to_string(),
        }
    }
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for GitHubRepo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(anyhow!("Invalid repository format. Expected 'owner/repo'."))
        } else {
            Ok(GitHubRepo {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_repo_valid() {
        let repo = GitHubRepo::from_str("owner/repo").unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.repo, "repo");
        assert_eq!(repo.to_string(), "owner/repo");
    }

    #[test]
    fn test_parse_github_repo_invalid() {
        assert!(GitHubRepo::from_str("owner").is_err());
        assert!(GitHubRepo::from_str("owner/").is_err());
        assert!(GitHubRepo::from_str("/repo").is_err());
        assert!(GitHubRepo::from_str("a/b/c").is_err());
    }

    #[test]
    fn test_default_repo_round_trips() {
        let repo = GitHubRepo::default();
        assert_eq!(repo.to_string(), DEFAULT_REPO);
        assert_eq!(DEFAULT_REPO.parse::<GitHubRepo>().unwrap(), repo);
    }
}
