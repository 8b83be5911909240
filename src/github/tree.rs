//! Fetches recursive tree listings with a bounded branch fallback.

use super::api::GitHubApi;
use crate::constants::{DEFAULT_BRANCH, FALLBACK_BRANCH};
use crate::core_types::{RepositoryReference, TreeEntry};
use crate::errors::Result;

/// A single-retry branch policy: if `primary` is not found, try `alternate` once.
///
/// The retry happens only when the requested branch *is* `primary` and the
/// failure is a 404. The alternate's error, if any, is returned as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchFallback {
    pub primary: &'static str,
    pub alternate: &'static str,
}

impl Default for BranchFallback {
    fn default() -> Self {
        Self {
            primary: DEFAULT_BRANCH,
            alternate: FALLBACK_BRANCH,
        }
    }
}

impl BranchFallback {
    /// Fetches the tree of `branch`, applying the fallback at most once.
    pub fn fetch(
        &self,
        api: &dyn GitHubApi,
        repo: &RepositoryReference,
        branch: &str,
    ) -> Result<Vec<TreeEntry>> {
        match api.tree(repo, branch) {
            Err(e) if e.is_not_found() && branch == self.primary => {
                log::warn!(
                    "Branch '{}' not found in {}, retrying with '{}'.",
                    branch,
                    repo,
                    self.alternate
                );
                api.tree(repo, self.alternate)
            }
            other => other,
        }
    }
}

/// Fetches the full recursive tree of `repo` at `branch` (default `main`).
///
/// A 404 for `main` triggers exactly one retry against `master`. Any other
/// failure, and any failure of the retry itself, is returned unchanged.
pub fn fetch_tree(
    api: &dyn GitHubApi,
    repo: &RepositoryReference,
    branch: Option<&str>,
) -> Result<Vec<TreeEntry>> {
    let branch = branch.unwrap_or(DEFAULT_BRANCH);
    log::debug!("Fetching tree for {} at '{}'", repo, branch);
    BranchFallback::default().fetch(api, repo, branch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::FakeGitHub;
    use crate::errors::Error;

    fn repo() -> RepositoryReference {
        RepositoryReference::new("octo", "widgets")
    }

    #[test]
    fn test_main_found_no_retry() {
        let api =
            FakeGitHub::new().with_tree("octo/widgets", "main", vec![TreeEntry::blob("a.rs", 1)]);
        let tree = fetch_tree(&api, &repo(), None).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(api.tree_calls(), vec!["main".to_string()]);
    }

    #[test]
    fn test_main_not_found_retries_master_once() {
        let api = FakeGitHub::new().with_tree(
            "octo/widgets",
            "master",
            vec![TreeEntry::blob("b.rs", 1)],
        );
        let tree = fetch_tree(&api, &repo(), None).unwrap();
        assert_eq!(tree, vec![TreeEntry::blob("b.rs", 1)]);
        assert_eq!(
            api.tree_calls(),
            vec!["main".to_string(), "master".to_string()]
        );
    }

    #[test]
    fn test_second_failure_propagates_master_error() {
        let api = FakeGitHub::new().with_tree_error("octo/widgets", "master", 500);
        let err = fetch_tree(&api, &repo(), None).unwrap_err();
        // The 404 for 'main' is replaced by the error of the 'master' attempt.
        assert_eq!(err.status(), Some(500));
        match err {
            Error::Api { resource, .. } => assert!(resource.contains("master")),
            other => panic!("Expected Error::Api, got {:?}", other),
        }
        assert_eq!(api.tree_calls().len(), 2);
    }

    #[test]
    fn test_rate_limit_is_not_retried() {
        let api = FakeGitHub::new().with_tree_error("octo/widgets", "main", 403);
        let err = fetch_tree(&api, &repo(), None).unwrap_err();
        assert!(matches!(err, Error::RateLimited { .. }));
        assert_eq!(api.tree_calls(), vec!["main".to_string()]);
    }

    #[test]
    fn test_other_branch_is_not_retried() {
        let api = FakeGitHub::new().with_tree("octo/widgets", "master", vec![]);
        let err = fetch_tree(&api, &repo(), Some("develop")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(api.tree_calls(), vec!["develop".to_string()]);
    }
}
