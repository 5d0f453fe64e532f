//! Command-line surface: argument definitions and the workflow they drive

pub mod orchestration;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "alias-tags",
    version,
    about = "Compute and publish floating release tags (v1, v1.2, latest)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the alias tags a release should receive
    Compute {
        /// Release version, e.g. v1.2.3
        target: String,

        #[arg(short, long = "tag", help = "Existing tag (repeatable)")]
        tags: Vec<String>,

        #[arg(
            long,
            value_name = "PATH",
            help = "Read existing tags from a file, '-' for stdin"
        )]
        tags_file: Option<PathBuf>,

        #[arg(
            long,
            value_name = "REF",
            help = "Print full references on this repository, e.g. registry:5000/app"
        )]
        reference: Option<String>,

        #[arg(long, help = "Print the full plan as JSON")]
        json: bool,

        #[arg(short, long, help = "Custom configuration file path")]
        config: Option<String>,
    },

    /// Tag the current repository with a release and move its aliases
    Publish {
        /// Release version, e.g. v1.2.3
        target: String,

        #[arg(long, default_value = "HEAD", help = "Revision to tag")]
        rev: String,

        #[arg(long, help = "Remote to fetch from and push to")]
        remote: Option<String>,

        #[arg(long, help = "Push the tags after creating them")]
        push: bool,

        #[arg(long, help = "Do not fetch remote tags first")]
        no_fetch: bool,

        #[arg(long, help = "Preview what would happen without making changes")]
        dry_run: bool,

        #[arg(short, long, help = "Skip confirmation prompts")]
        force: bool,

        #[arg(short, long, help = "Custom configuration file path")]
        config: Option<String>,
    },
}
