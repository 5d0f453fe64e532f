//! Domain logic - versions, tag sets and artifact references, independent of git

pub mod reference;
pub mod tag;
pub mod version;

pub use reference::{tagged_references, ImageReference};
pub use tag::{parse_tag_listing, partition_tags, PartitionedTags};
pub use version::ReleaseVersion;
