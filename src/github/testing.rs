//! In-memory `GitHubApi` used by unit tests.

use super::api::{EncodedContent, GitHubApi, SearchHit};
use crate::core_types::{RepositoryInfo, RepositoryReference, TreeEntry};
use crate::errors::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::HashMap;
use std::sync::Mutex;

enum Stored<T> {
    Present(T),
    Failing(u16),
}

#[derive(Default)]
pub(crate) struct FakeGitHub {
    repos: HashMap<String, RepositoryInfo>,
    trees: HashMap<(String, String), Stored<Vec<TreeEntry>>>,
    files: HashMap<(String, String), Stored<EncodedContent>>,
    search_hits: Vec<SearchHit>,
    tree_calls: Mutex<Vec<String>>,
    search_calls: Mutex<Vec<(String, usize)>>,
}

impl FakeGitHub {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_repo(
        mut self,
        full_name: &str,
        description: Option<&str>,
        language: Option<&str>,
    ) -> Self {
        let name = full_name.rsplit('/').next().unwrap_or(full_name).to_string();
        self.repos.insert(
            full_name.to_string(),
            RepositoryInfo {
                name,
                full_name: full_name.to_string(),
                description: description.map(str::to_string),
                language: language.map(str::to_string),
                stars: 42,
                default_branch: "main".to_string(),
                html_url: format!("https://github.com/{}", full_name),
            },
        );
        self
    }

    pub(crate) fn with_default_branch(mut self, full_name: &str, branch: &str) -> Self {
        if let Some(info) = self.repos.get_mut(full_name) {
            info.default_branch = branch.to_string();
        }
        self
    }

    pub(crate) fn with_tree(
        mut self,
        full_name: &str,
        branch: &str,
        entries: Vec<TreeEntry>,
    ) -> Self {
        self.trees.insert(
            (full_name.to_string(), branch.to_string()),
            Stored::Present(entries),
        );
        self
    }

    pub(crate) fn with_tree_error(mut self, full_name: &str, branch: &str, status: u16) -> Self {
        self.trees.insert(
            (full_name.to_string(), branch.to_string()),
            Stored::Failing(status),
        );
        self
    }

    pub(crate) fn with_file(self, full_name: &str, path: &str, text: &str) -> Self {
        let encoded = EncodedContent {
            path: path.to_string(),
            content: Some(STANDARD.encode(text)),
            encoding: Some("base64".to_string()),
            size: text.len() as u64,
        };
        self.with_encoded_file(full_name, encoded)
    }

    pub(crate) fn with_encoded_file(mut self, full_name: &str, content: EncodedContent) -> Self {
        self.files.insert(
            (full_name.to_string(), content.path.clone()),
            Stored::Present(content),
        );
        self
    }

    pub(crate) fn with_file_error(mut self, full_name: &str, path: &str, status: u16) -> Self {
        self.files.insert(
            (full_name.to_string(), path.to_string()),
            Stored::Failing(status),
        );
        self
    }

    pub(crate) fn with_search_hit(mut self, full_name: &str, stars: u64) -> Self {
        let name = full_name.rsplit('/').next().unwrap_or(full_name).to_string();
        self.search_hits.push(SearchHit {
            name,
            full_name: full_name.to_string(),
            description: None,
            language: None,
            stars,
            html_url: format!("https://github.com/{}", full_name),
            topics: Vec::new(),
        });
        self
    }

    pub(crate) fn tree_calls(&self) -> Vec<String> {
        self.tree_calls.lock().unwrap().clone()
    }

    pub(crate) fn search_calls(&self) -> Vec<(String, usize)> {
        self.search_calls.lock().unwrap().clone()
    }
}

impl GitHubApi for FakeGitHub {
    fn repository(&self, repo: &RepositoryReference) -> Result<RepositoryInfo> {
        self.repos
            .get(&repo.full_name())
            .cloned()
            .ok_or_else(|| Error::from_status(404, format!("/repos/{}", repo), "Not Found"))
    }

    fn tree(&self, repo: &RepositoryReference, branch: &str) -> Result<Vec<TreeEntry>> {
        self.tree_calls.lock().unwrap().push(branch.to_string());
        let resource = format!("/repos/{}/git/trees/{}", repo, branch);
        match self.trees.get(&(repo.full_name(), branch.to_string())) {
            Some(Stored::Present(entries)) => Ok(entries.clone()),
            Some(Stored::Failing(status)) => {
                Err(Error::from_status(*status, resource, "fake failure"))
            }
            None => Err(Error::from_status(404, resource, "Not Found")),
        }
    }

    fn file_content(&self, repo: &RepositoryReference, path: &str) -> Result<EncodedContent> {
        let resource = format!("/repos/{}/contents/{}", repo, path);
        match self.files.get(&(repo.full_name(), path.to_string())) {
            Some(Stored::Present(content)) => Ok(content.clone()),
            Some(Stored::Failing(status)) => {
                Err(Error::from_status(*status, resource, "fake failure"))
            }
            None => Err(Error::from_status(404, resource, "Not Found")),
        }
    }

    fn search_repositories(&self, query: &str, per_page: usize) -> Result<Vec<SearchHit>> {
        self.search_calls
            .lock()
            .unwrap()
            .push((query.to_string(), per_page));
        Ok(self.search_hits.iter().take(per_page).cloned().collect())
    }
}
