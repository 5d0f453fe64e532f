use crate::domain::version::ReleaseVersion;

/// A tag set split into the entries that parsed as release versions and the
/// ones that did not (branch names, `latest`, shorthand aliases, ...).
#[derive(Debug, Clone, Default)]
pub struct PartitionedTags {
    pub releases: Vec<ReleaseVersion>,
    pub ignored: Vec<String>,
}

/// Split a tag set into release versions and ignored strings.
///
/// Input order is preserved in both halves.
pub fn partition_tags<S: AsRef<str>>(tags: &[S]) -> PartitionedTags {
    let mut partitioned = PartitionedTags::default();

    for tag in tags {
        let tag = tag.as_ref();
        match ReleaseVersion::parse(tag) {
            Ok(version) => partitioned.releases.push(version),
            Err(_) => partitioned.ignored.push(tag.to_string()),
        }
    }

    partitioned
}

/// Split a tag listing on whitespace.
///
/// Registry clients print one tag per line (`oras repo tags`), people paste
/// them space separated; both are accepted.
pub fn parse_tag_listing(listing: &str) -> Vec<String> {
    listing.split_whitespace().map(str::to_string).collect()
}
