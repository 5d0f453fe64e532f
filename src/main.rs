use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alias_tags::cli::orchestration::{self, AliasWorkflowArgs};
use alias_tags::cli::{Cli, Commands};
use alias_tags::config;
use alias_tags::domain::{parse_tag_listing, tagged_references};
use alias_tags::git::Git2TagStore;
use alias_tags::ui;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "alias_tags=debug"
    } else {
        "alias_tags=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compute {
            target,
            tags,
            tags_file,
            reference,
            json,
            config,
        } => compute(
            &target,
            tags,
            tags_file.as_deref(),
            reference.as_deref(),
            json,
            config.as_deref(),
        ),
        Commands::Publish {
            target,
            rev,
            remote,
            push,
            no_fetch,
            dry_run,
            force,
            config,
        } => {
            let config = config::load_config(config.as_deref())?;

            let mut args = AliasWorkflowArgs::new(target, &config);
            args.revision = rev;
            if let Some(remote) = remote {
                args.remote = remote;
            }
            args.push |= push;
            args.fetch &= !no_fetch;
            args.dry_run = dry_run;

            publish(args, &config, force)
        }
    }
}

fn compute(
    target: &str,
    mut existing: Vec<String>,
    tags_file: Option<&Path>,
    reference: Option<&str>,
    json: bool,
    config_path: Option<&str>,
) -> Result<()> {
    let config = config::load_config(config_path)?;

    if let Some(path) = tags_file {
        existing.extend(parse_tag_listing(&read_listing(path)?));
    }

    let plan = orchestration::plan_from_tags(target, &existing, &config.aliases)?;
    for warning in &plan.warnings {
        tracing::debug!("{}", warning);
    }

    let lines = match reference {
        Some(reference) => tagged_references(reference, &plan.aliases)?,
        None => plan.aliases.clone(),
    };

    if json {
        let mut value = serde_json::to_value(&plan)?;
        if reference.is_some() {
            value["references"] = serde_json::json!(lines);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(())
}

fn read_listing(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut listing = String::new();
        io::stdin()
            .read_to_string(&mut listing)
            .context("reading tags from stdin")?;
        return Ok(listing);
    }

    fs::read_to_string(path).with_context(|| format!("reading tags from {}", path.display()))
}

fn publish(args: AliasWorkflowArgs, config: &config::Config, force: bool) -> Result<()> {
    let store = Git2TagStore::open(".").context("opening git repository")?;

    // Plan first so the user confirms what will actually be written.
    let preview = AliasWorkflowArgs {
        dry_run: true,
        ..args.clone()
    };
    let planned = orchestration::run_alias_workflow(&store, &preview, config)?;
    for warning in &planned.plan.warnings {
        ui::display_warning(warning);
    }
    ui::display_plan(&planned.plan);

    if args.dry_run {
        ui::display_status(&ui::format_result(&planned));
        return Ok(());
    }

    if !force && !ui::confirm_action("Create these tags?")? {
        println!("Tag creation cancelled by user.");
        return Ok(());
    }

    let applied = AliasWorkflowArgs {
        fetch: false,
        ..args.clone()
    };
    let result = orchestration::run_alias_workflow(&store, &applied, config)?;
    ui::display_success(&ui::format_result(&result));

    if !result.pushed {
        ui::display_manual_push_instruction(&result.plan, &args.remote);
    }

    Ok(())
}
