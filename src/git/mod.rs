//! Tag storage abstraction layer
//!
//! Floating tags are published by listing a repository's tags, computing the
//! aliases, then creating (or moving) tags. This module puts those operations
//! behind the [TagStore] trait:
//!
//! - [repository::Git2TagStore]: a real git repository, via the `git2` crate
//! - [mock::MockTagStore]: an in-memory store for tests
//!
//! ```rust
//! # use alias_tags::git::TagStore;
//! # fn example<S: TagStore>(store: &S) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = store.list_tags()?;
//! let head = store.resolve_revision("HEAD")?;
//! store.create_tag("v1", head, true)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagStore;
pub use repository::Git2TagStore;

use crate::error::Result;
use git2::Oid;

/// Tag operations needed to publish a release and its aliases
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync`.
///
/// ## Error Handling
///
/// Implementations map backend failures (like `git2::Error`) onto
/// [crate::error::AliasTagError] variants: `Tag` for local tag problems,
/// `Remote` for fetch/push failures.
pub trait TagStore: Send + Sync {
    /// Get every tag name in the store
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, in no particular order
    /// * `Err` - If the store cannot be read
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Resolve a revision (`HEAD`, a branch, a tag, a hash) to a commit
    ///
    /// # Arguments
    /// * `revision` - Anything `git rev-parse` would accept
    ///
    /// # Returns
    /// * `Ok(Oid)` - The commit the revision points at
    /// * `Err` - If the revision does not resolve to a commit
    fn resolve_revision(&self, revision: &str) -> Result<Oid>;

    /// Create a lightweight tag at `oid`
    ///
    /// # Arguments
    /// * `name` - Tag name
    /// * `oid` - Commit to tag
    /// * `force` - Move the tag if it already exists (needed for aliases)
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag exists and `force` is false, or the commit is unknown
    fn create_tag(&self, name: &str, oid: Oid, force: bool) -> Result<()>;

    /// Push tags to a remote
    ///
    /// # Arguments
    /// * `remote` - Remote name (e.g., "origin")
    /// * `tag_names` - Tags to push
    /// * `force` - Overwrite the remote tags (needed for aliases)
    fn push_tags(&self, remote: &str, tag_names: &[&str], force: bool) -> Result<()>;

    /// Fetch all tags from a remote
    ///
    /// # Arguments
    /// * `remote` - Remote name (e.g., "origin")
    fn fetch_tags(&self, remote: &str) -> Result<()>;
}
