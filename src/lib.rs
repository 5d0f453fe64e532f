pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod policy;
pub mod report;
pub mod ui;
pub mod warning;

pub use error::{AliasTagError, Result};
pub use policy::{compute_alias_tags, Alias, AliasPolicy, AliasTags};
