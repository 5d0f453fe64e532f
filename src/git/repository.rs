use crate::error::{AliasTagError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;
use std::sync::Mutex;

/// Tag store backed by a git repository on disk
///
/// `git2::Repository` is `Send` but not `Sync`, so access is serialized.
pub struct Git2TagStore {
    repo: Mutex<Git2Repo>,
}

impl Git2TagStore {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2TagStore::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2TagStore {
            repo: Mutex::new(repo),
        }
    }

    fn with_repo<T>(&self, f: impl FnOnce(&Git2Repo) -> Result<T>) -> Result<T> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| AliasTagError::tag("repository lock poisoned"))?;
        f(&repo)
    }
}

impl super::TagStore for Git2TagStore {
    fn list_tags(&self) -> Result<Vec<String>> {
        self.with_repo(|repo| {
            let tags = repo.tag_names(None)?;

            Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
        })
    }

    fn resolve_revision(&self, revision: &str) -> Result<Oid> {
        self.with_repo(|repo| {
            let object = repo.revparse_single(revision).map_err(|e| {
                AliasTagError::tag(format!("Cannot resolve '{}': {}", revision, e))
            })?;
            let commit = object.peel_to_commit().map_err(|e| {
                AliasTagError::tag(format!("'{}' is not a commit: {}", revision, e))
            })?;

            Ok(commit.id())
        })
    }

    fn create_tag(&self, name: &str, oid: Oid, force: bool) -> Result<()> {
        self.with_repo(|repo| {
            let object = repo
                .find_object(oid, None)
                .map_err(|e| AliasTagError::tag(format!("Cannot find object: {}", e)))?;

            repo.tag_lightweight(name, &object, force).map_err(|e| {
                AliasTagError::tag(format!("Cannot create tag '{}': {}", name, e))
            })?;

            Ok(())
        })
    }

    fn push_tags(&self, remote: &str, tag_names: &[&str], force: bool) -> Result<()> {
        self.with_repo(|repo| {
            let mut remote = repo
                .find_remote(remote)
                .map_err(|e| AliasTagError::remote(format!("Cannot find remote: {}", e)))?;

            let refspecs = push_refspecs(tag_names, force);
            let refspec_strs: Vec<&str> = refspecs.iter().map(|s| s.as_str()).collect();

            remote
                .push(&refspec_strs, None)
                .map_err(|e| AliasTagError::remote(format!("Push failed: {}", e)))?;

            Ok(())
        })
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.with_repo(|repo| {
            let mut remote = repo
                .find_remote(remote)
                .map_err(|e| AliasTagError::remote(format!("Cannot find remote: {}", e)))?;

            remote
                .fetch(&["+refs/tags/*:refs/tags/*"], None, None)
                .map_err(|e| AliasTagError::remote(format!("Fetch failed: {}", e)))?;

            Ok(())
        })
    }
}

fn push_refspecs(tag_names: &[&str], force: bool) -> Vec<String> {
    let marker = if force { "+" } else { "" };
    tag_names
        .iter()
        .map(|tag| format!("{}refs/tags/{}:refs/tags/{}", marker, tag, tag))
        .collect()
}
