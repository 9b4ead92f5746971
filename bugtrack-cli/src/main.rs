mod cli;
mod display;
mod prompts;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::debug;

use bugtrack_core::{export, load_config, BugCollectionView, BugError, Config, SortKey};

use crate::cli::{Cli, Command, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config, cli.verbose);

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    // Every run starts from the demo snapshot
    let mut view = BugCollectionView::with_sample_data();
    if let Some(key) = config.default_sort {
        debug!("Applying configured default sort: {}", key);
        view.apply_sort(key);
    }

    match &cli.command {
        Command::List {
            search,
            sort,
            format,
        } => {
            list_bugs(&mut view, search.as_deref(), *sort, *format)?;
        }
        Command::Show { id, ai, json } => {
            let bug = view.get(*id).ok_or(BugError::NotFound(*id))?;
            if *json {
                let out = export::record_to_json(bug).context("Failed to serialize bug")?;
                println!("{}", out);
            } else {
                display::print_bug_detail(bug, *ai);
            }
        }
        Command::Stats => {
            display::print_stats(view.records());
        }
        Command::Assignees => {
            list_assignees(&config);
        }
        Command::Shell => {
            shell::Shell::new(view, &config).run()?;
        }
    }

    Ok(())
}

/// Sets up env_logger; RUST_LOG wins over --verbose, which wins over the config
fn init_logging(config: &Config, verbose: bool) {
    let default_filter = if verbose {
        "debug".to_string()
    } else {
        config.log_level.clone().unwrap_or_else(|| "warn".to_string())
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn list_bugs(
    view: &mut BugCollectionView,
    search: Option<&str>,
    sort: Option<SortKey>,
    format: OutputFormat,
) -> Result<()> {
    if let Some(key) = sort {
        view.apply_sort(key);
    }
    if let Some(term) = search {
        view.set_search_term(term);
    }

    let visible = view.visible_records();
    match format {
        OutputFormat::Table => {
            display::print_sort_bar(view.active_sort());
            display::print_bug_table(&visible);
        }
        OutputFormat::Json => {
            let json = export::records_to_json(&visible).context("Failed to serialize bug list")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn list_assignees(config: &Config) {
    println!("{}", "Team Members".bold());
    for name in config.team() {
        println!("  {}", name);
    }
}
