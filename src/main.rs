mod commands;
mod logging;
mod prompt;
mod reporter;

use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use std::time::SystemTime;

use anyhow::Context;
use chrono::{DateTime, Local};
use clap::Parser;
use colored::*;
use commands::{Cli, Commands, PreviewArgs, RunArgs};
use dotenv::dotenv;
use renum::engine::{BatchResult, RenameEngine, RenameRequest};
use renum::{renamer, scanner, AppConfig};
use reporter::CliReporter;
use rust_i18n::t;
use tracing::{error, info};

rust_i18n::i18n!("locales", fallback = "en");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match renum::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    if let Some(language) = &config.language {
        rust_i18n::set_locale(language);
    }

    let args = Cli::parse();

    match args.command {
        Some(Commands::Run(run_args)) => {
            if let Err(err) = run_batch(&config, run_args) {
                error!("{}", t!("batch_error", error = err.to_string()));
            }
        }
        Some(Commands::Preview(preview_args)) => {
            if let Err(err) = run_preview(&config, preview_args) {
                error!("{}", t!("batch_error", error = err.to_string()));
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => {
            if let Err(err) = run_interactive(&config) {
                error!("{}", t!("batch_error", error = err.to_string()));
            }
        }
    }

    Ok(())
}

/// Default flow, mirroring sequential prompts: pick a language, confirm,
/// ask for the folder, ask for the base name, then run the batch.
fn run_interactive(config: &AppConfig) -> anyhow::Result<()> {
    if config.language.is_none() {
        let language = prompt::prompt_language()?;
        rust_i18n::set_locale(language);
    }

    if !prompt::prompt_confirm(&t!("confirm_rename"), Some(false))? {
        println!("{}", t!("no_changes"));
        return Ok(());
    }

    let directory = prompt::prompt_input(&t!("folder_path"))?;
    let base_name = resolve_base_name(None, config)?;

    execute_batch(config, PathBuf::from(directory), base_name)
}

fn run_batch(config: &AppConfig, args: RunArgs) -> anyhow::Result<()> {
    let directory = resolve_directory(args.directory)?;
    let base_name = resolve_base_name(args.name, config)?;

    if !args.yes && !prompt::prompt_confirm(&t!("confirm_rename"), Some(true))? {
        println!("{}", t!("no_changes"));
        return Ok(());
    }

    execute_batch(config, directory, base_name)
}

fn execute_batch(config: &AppConfig, directory: PathBuf, base_name: String) -> anyhow::Result<()> {
    let engine = RenameEngine::new(config.clone());
    let request = RenameRequest {
        directory,
        base_name,
    };
    let cli_reporter = CliReporter::new();
    let result = engine.run(&request, &cli_reporter)?;

    report_outcomes(&result);
    Ok(())
}

fn report_outcomes(result: &BatchResult) {
    for outcome in &result.outcomes {
        if outcome.succeeded {
            println!(
                "{}",
                t!(
                    "rename_success",
                    old = outcome.entry.original_name.as_str(),
                    new = outcome.entry.target_name.as_str()
                )
            );
        } else {
            let detail = outcome.error_detail.as_deref().unwrap_or("unknown error");
            eprintln!(
                "{}",
                t!(
                    "rename_error",
                    file = outcome.entry.original_name.as_str(),
                    error = detail
                )
                .red()
            );
        }
    }

    if result.failed == 0 && !result.outcomes.is_empty() {
        println!("{}", t!("all_renamed"));
    }

    println!();
    info!(
        "Scan: {}, Rename: {}",
        format!("{:.2}s", result.scan_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.rename_duration.as_secs_f64()).green(),
    );
    println!(
        "{}",
        t!(
            "summary",
            renamed = format!("{}", result.renamed).green().to_string(),
            failed = if result.failed > 0 {
                format!("{}", result.failed).red().to_string()
            } else {
                result.failed.to_string()
            }
        )
    );
}

/// Scan + plan only; prints the numbered mapping with creation timestamps
/// and touches nothing.
fn run_preview(config: &AppConfig, args: PreviewArgs) -> anyhow::Result<()> {
    let directory = resolve_directory(args.directory)?;
    let base_name = resolve_base_name(args.name, config)?;

    let files = scanner::scan_directory(&directory, &config.ignore_patterns)?;
    let created_by_name: HashMap<&str, SystemTime> = files
        .iter()
        .map(|file| (file.name.as_str(), file.created))
        .collect();

    let entries = renamer::plan(&files, &base_name);
    for entry in &entries {
        let created: DateTime<Local> = created_by_name[entry.original_name.as_str()].into();
        println!(
            "{:>4}  {}  {}  ->  {}",
            entry.sequence_index,
            created.format("%Y-%m-%d %H:%M:%S"),
            entry.original_name,
            entry.target_name.cyan(),
        );
    }
    info!("{} files planned, nothing renamed", entries.len());

    Ok(())
}

fn resolve_directory(arg: Option<String>) -> anyhow::Result<PathBuf> {
    let directory = match arg {
        Some(directory) => directory,
        None => prompt::prompt_input(&t!("folder_path")).context("reading folder path")?,
    };
    Ok(PathBuf::from(directory))
}

fn resolve_base_name(arg: Option<String>, config: &AppConfig) -> anyhow::Result<String> {
    if let Some(name) = arg {
        return Ok(name);
    }
    if let Some(name) = &config.default_base_name {
        return Ok(name.clone());
    }
    prompt::prompt_input(&t!("new_name")).context("reading base name")
}
