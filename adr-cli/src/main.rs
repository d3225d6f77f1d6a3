//! Command-line interface for adr-index
//! This binary reads a directory of ADR documents, validates their metadata and prints the
//! records grouped by tag.
//!
//! Usage:
//!   adr-index [DIR] [--config <file>] [--format <format>] [--collect-all]   - Print the tag index
//!   adr-index [DIR] --check                                                 - Validate only
//!   adr-index --list-formats                                                - List available formats
//!
//! Any failure is fatal: the messages go to stderr and the exit code is 1. Nothing is printed
//! on stdout unless every document is valid.

mod discovery;

use adr_babel::FormatRegistry;
use adr_config::{AdrConfig, Loader, LOCAL_CONFIG_FILE};
use adr_parser::adr::{group_by_tag, BuildFailure, IndexBuilder};
use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("adr-index")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate Architecture Decision Records and index them by tag")
        .arg(
            Arg::new("dir")
                .help("Directory holding the ADR documents (default: discovery.directory)")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./.adr-index.toml")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format for the index (default: output.format)"),
        )
        .arg(
            Arg::new("collect-all")
                .long("collect-all")
                .help("Report every invalid document instead of stopping at the first")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Validate only; print a summary to stderr instead of the index")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("More logging on stderr (-v info, -vv debug); RUST_LOG takes precedence")
                .action(ArgAction::Count),
        )
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<BuildFailure>() {
        Some(failure) => {
            for error in failure.errors() {
                eprintln!("error: {}", error);
            }
        }
        None => eprintln!("error: {:#}", err),
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }

    let config = load_config(matches)?;
    let directory = matches
        .get_one::<PathBuf>("dir")
        .cloned()
        .unwrap_or_else(|| config.discovery.directory.clone());

    if matches.get_flag("check") {
        handle_check_command(&config, &directory, &registry)
    } else {
        handle_index_command(&config, &directory, &registry)
    }
}

fn load_config(matches: &ArgMatches) -> Result<AdrConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("collect-all") {
        loader = loader.set_override("build.error_policy", "collect-all")?;
    }
    loader.build().context("invalid configuration")
}

fn index_builder(config: &AdrConfig) -> IndexBuilder {
    IndexBuilder::new(config.schema.to_schema()).with_policy(config.build.error_policy)
}

/// Handle the default command: print the serialized tag index
fn handle_index_command(
    config: &AdrConfig,
    directory: &Path,
    registry: &FormatRegistry,
) -> Result<()> {
    let format = &config.output.format;
    if !registry.output_formats().contains(format) {
        bail!(
            "unknown output format '{}', expected one of: {}",
            format,
            registry.output_formats().join(", ")
        );
    }

    let paths = discovery::discover(directory, &config.discovery)?;
    let documents = discovery::load_documents(&paths, registry);
    let index = index_builder(config).build_from(documents)?;

    let output = registry.serialize(&index, format)?;
    print!("{}", output);
    Ok(())
}

/// Handle --check: validate without printing the index
fn handle_check_command(
    config: &AdrConfig,
    directory: &Path,
    registry: &FormatRegistry,
) -> Result<()> {
    let paths = discovery::discover(directory, &config.discovery)?;
    let documents = discovery::load_documents(&paths, registry);
    let records = index_builder(config).records_from(documents)?;
    let index = group_by_tag(&records);

    eprintln!("ok: {} records, {} tags", records.len(), index.len());
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let direction = match (format.supports_tokenizing(), format.supports_serialization()) {
                (true, true) => "input, output",
                (true, false) => "input",
                (false, true) => "output",
                (false, false) => "none",
            };
            println!("  {} ({})", name, direction);
            println!("    {}", format.description());
            println!();
        }
    }
}
