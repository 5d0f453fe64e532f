//! Alias publishing workflow
//!
//! Ties the tag policy to a [TagStore]: read the existing tags, decide the
//! aliases, then create the release tag and move every alias onto it. Kept
//! free of clap and terminal I/O so it can be driven programmatically.

use serde::Serialize;

use crate::config::{AliasesConfig, Config};
use crate::domain::tag::partition_tags;
use crate::error::Result;
use crate::git::TagStore;
use crate::policy::AliasPolicy;
use crate::warning::PublishWarning;

/// Arguments for the publish workflow
///
/// Mirrors the CLI arguments with config defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasWorkflowArgs {
    /// Release version to tag, e.g. `v1.2.3`
    pub target: String,

    /// Revision the release tag points at
    pub revision: String,

    /// Remote to fetch from and push to
    pub remote: String,

    /// Fetch remote tags before planning
    pub fetch: bool,

    /// Push release and alias tags after creating them
    pub push: bool,

    /// Plan only; create nothing
    pub dry_run: bool,
}

impl AliasWorkflowArgs {
    /// Arguments for `target` at `HEAD`, remote settings taken from `config`
    pub fn new(target: impl Into<String>, config: &Config) -> Self {
        AliasWorkflowArgs {
            target: target.into(),
            revision: "HEAD".to_string(),
            remote: config.git.remote.clone(),
            fetch: config.git.fetch,
            push: config.git.push,
            dry_run: false,
        }
    }
}

/// Alias decision for a release
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasPlan {
    /// The release tag itself
    pub release_tag: String,

    /// Alias tag names to (re)point at the release
    pub aliases: Vec<String>,

    /// Existing release tags considered, as given
    pub releases: Vec<String>,

    /// Existing tags that are not release versions
    pub ignored: Vec<String>,

    #[serde(skip)]
    pub warnings: Vec<PublishWarning>,
}

/// Result of a publish workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub plan: AliasPlan,

    /// Commit the tags were created on; `None` on a dry run
    pub commit: Option<String>,

    /// Whether tags were pushed to the remote
    pub pushed: bool,
}

/// Compute the alias plan for `target` against an explicit tag list.
///
/// Fails on an invalid or already published target; nothing else is an error.
pub fn plan_from_tags<S: AsRef<str>>(
    target: &str,
    existing: &[S],
    aliases: &AliasesConfig,
) -> Result<AliasPlan> {
    let decided = AliasPolicy::new()
        .evaluate(target, existing)?
        .retain(|alias| aliases.allows(alias));

    let partitioned = partition_tags(existing);

    let mut warnings = Vec::new();
    if decided.version().is_prerelease() {
        warnings.push(PublishWarning::PrereleaseTarget {
            version: target.to_string(),
        });
    }
    if !partitioned.ignored.is_empty() {
        warnings.push(PublishWarning::IgnoredTags {
            tags: partitioned.ignored.clone(),
        });
    }

    Ok(AliasPlan {
        release_tag: target.to_string(),
        aliases: decided.names(),
        releases: partitioned
            .releases
            .iter()
            .map(|release| release.to_string())
            .collect(),
        ignored: partitioned.ignored,
        warnings,
    })
}

/// Compute the alias plan for `target` against the tags in `store`.
pub fn plan_aliases<S: TagStore + ?Sized>(
    store: &S,
    target: &str,
    aliases: &AliasesConfig,
) -> Result<AliasPlan> {
    let existing = store.list_tags()?;
    tracing::debug!(count = existing.len(), "listed existing tags");

    plan_from_tags(target, &existing, aliases)
}

/// Main publish workflow
///
/// 1. Fetch remote tags (a failure is downgraded to a warning)
/// 2. Plan the aliases from the store's tags
/// 3. Create the release tag at `args.revision`
/// 4. Move every alias tag onto the same commit
/// 5. Optionally push the release tag, then force-push the aliases
///
/// Planning errors abort before any tag is written.
pub fn run_alias_workflow<S: TagStore + ?Sized>(
    store: &S,
    args: &AliasWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let mut fetch_warning = None;
    if args.fetch {
        if let Err(e) = store.fetch_tags(&args.remote) {
            tracing::warn!(remote = %args.remote, error = %e, "fetch failed");
            fetch_warning = Some(PublishWarning::FetchFailed {
                remote: args.remote.clone(),
                reason: e.to_string(),
            });
        }
    }

    let mut plan = plan_aliases(store, &args.target, &config.aliases)?;
    if let Some(warning) = fetch_warning {
        plan.warnings.insert(0, warning);
    }

    if args.dry_run {
        return Ok(WorkflowResult {
            plan,
            commit: None,
            pushed: false,
        });
    }

    let oid = store.resolve_revision(&args.revision)?;
    store.create_tag(&plan.release_tag, oid, false)?;
    tracing::info!(tag = %plan.release_tag, commit = %oid, "created release tag");

    for alias in &plan.aliases {
        store.create_tag(alias, oid, true)?;
        tracing::info!(tag = %alias, commit = %oid, "moved alias tag");
    }

    if args.push {
        store.push_tags(&args.remote, &[plan.release_tag.as_str()], false)?;

        let aliases: Vec<&str> = plan.aliases.iter().map(String::as_str).collect();
        if !aliases.is_empty() {
            store.push_tags(&args.remote, &aliases, true)?;
        }
    }

    Ok(WorkflowResult {
        plan,
        commit: Some(oid.to_string()),
        pushed: args.push,
    })
}
