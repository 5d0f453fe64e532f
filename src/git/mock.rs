use crate::error::{AliasTagError, Result};
use crate::git::TagStore;
use git2::Oid;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory tag store for tests; records every push and fetch
#[derive(Default)]
pub struct MockTagStore {
    tags: Mutex<HashMap<String, Oid>>,
    revisions: HashMap<String, Oid>,
    pushed: Mutex<Vec<(String, String, bool)>>,
    fetched: Mutex<Vec<String>>,
    fail_push: bool,
}

impl MockTagStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.into(), oid);
    }

    /// Make a revision name (`HEAD`, a branch) resolve to an OID
    pub fn set_revision(&mut self, revision: impl Into<String>, oid: Oid) {
        self.revisions.insert(revision.into(), oid);
    }

    /// Make every push fail with a remote error
    pub fn fail_pushes(&mut self) {
        self.fail_push = true;
    }

    /// The commit a tag currently points at
    pub fn tag_target(&self, name: &str) -> Option<Oid> {
        self.tags.lock().ok()?.get(name).copied()
    }

    /// Every pushed `(remote, tag, force)` triple, in push order
    pub fn pushed(&self) -> Vec<(String, String, bool)> {
        self.pushed.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Remotes fetched from, in order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().map(|f| f.clone()).unwrap_or_default()
    }
}

fn poisoned() -> AliasTagError {
    AliasTagError::tag("mock store lock poisoned")
}

impl TagStore for MockTagStore {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.tags.lock().map_err(|_| poisoned())?;
        Ok(tags.keys().cloned().collect())
    }

    fn resolve_revision(&self, revision: &str) -> Result<Oid> {
        if let Some(oid) = self.revisions.get(revision) {
            return Ok(*oid);
        }
        self.tag_target(revision)
            .ok_or_else(|| AliasTagError::tag(format!("Cannot resolve '{}'", revision)))
    }

    fn create_tag(&self, name: &str, oid: Oid, force: bool) -> Result<()> {
        let mut tags = self.tags.lock().map_err(|_| poisoned())?;
        if !force && tags.contains_key(name) {
            return Err(AliasTagError::tag(format!("Tag '{}' already exists", name)));
        }
        tags.insert(name.to_string(), oid);
        Ok(())
    }

    fn push_tags(&self, remote: &str, tag_names: &[&str], force: bool) -> Result<()> {
        if self.fail_push {
            return Err(AliasTagError::remote("Push failed: authentication required"));
        }
        let mut pushed = self.pushed.lock().map_err(|_| poisoned())?;
        for tag in tag_names {
            pushed.push((remote.to_string(), tag.to_string(), force));
        }
        Ok(())
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        let mut fetched = self.fetched.lock().map_err(|_| poisoned())?;
        fetched.push(remote.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_store_tags() {
        let mut store = MockTagStore::new();
        let oid = Oid::from_bytes(&[2; 20]).unwrap();

        store.add_tag("v1.0.0", oid);

        assert_eq!(store.tag_target("v1.0.0"), Some(oid));
        assert_eq!(store.tag_target("v2.0.0"), None);
        assert_eq!(store.list_tags().unwrap(), vec!["v1.0.0"]);
    }

    #[test]
    fn test_mock_store_resolve() {
        let mut store = MockTagStore::new();
        let head = Oid::from_bytes(&[1; 20]).unwrap();
        let tagged = Oid::from_bytes(&[2; 20]).unwrap();
        store.set_revision("HEAD", head);
        store.add_tag("v1.0.0", tagged);

        assert_eq!(store.resolve_revision("HEAD").unwrap(), head);
        assert_eq!(store.resolve_revision("v1.0.0").unwrap(), tagged);
        assert!(store.resolve_revision("main").is_err());
    }

    #[test]
    fn test_mock_store_create_tag_force() {
        let store = MockTagStore::new();
        let a = Oid::from_bytes(&[1; 20]).unwrap();
        let b = Oid::from_bytes(&[2; 20]).unwrap();

        store.create_tag("v1", a, false).unwrap();
        assert!(store.create_tag("v1", b, false).is_err());
        store.create_tag("v1", b, true).unwrap();
        assert_eq!(store.tag_target("v1"), Some(b));
    }

    #[test]
    fn test_mock_store_records_pushes() {
        let mut store = MockTagStore::new();
        store.push_tags("origin", &["v1.0.0", "v1"], true).unwrap();
        assert_eq!(
            store.pushed(),
            vec![
                ("origin".to_string(), "v1.0.0".to_string(), true),
                ("origin".to_string(), "v1".to_string(), true),
            ]
        );

        store.fail_pushes();
        assert!(store.push_tags("origin", &["v2"], false).is_err());
    }

    #[test]
    fn test_mock_store_default() {
        let store = MockTagStore::default();
        assert!(store.list_tags().unwrap().is_empty());
        assert!(store.fetched().is_empty());
    }
}
