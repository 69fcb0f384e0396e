//! Command-line interface for rigref
//! Resolves node references of rig definition documents (JSON/YAML trees produced by a parser).
//!
//! Usage:
//!   rigref resolve `<path>` [--config `<file>`] [--disable] [--output json|yaml]  - Resolve and print the document
//!   rigref table `<path>` [--config `<file>`] [--format text|json]               - Dump the canonical node tables
//!   rigref list-formats                                                          - List table dump formats
//!
//! Exit codes: 0 on success, 1 if resolution reported errors, 2 if the input
//! or configuration could not be loaded.

use clap::{Arg, ArgAction, ArgMatches, Command};
use rigref::rigdef::config::{ConfigLayers, RigrefConfig};
use rigref::rigdef::formats::FormatRegistry;
use rigref::rigdef::loader::{write_document, DocumentFormat, DocumentLoader};
use rigref::rigdef::resolver::{ResolverOptions, SequentialResolver};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the built-in defaults");

    let matches = Command::new("rigref")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve node references of rig definition documents to canonical slots")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("resolve")
                .about("Resolve a document and print it")
                .arg(
                    Arg::new("path")
                        .help("Path to the document tree (.json, .yaml)")
                        .required(true)
                        .index(1),
                )
                .arg(config_arg.clone())
                .arg(
                    Arg::new("disable")
                        .long("disable")
                        .help("Pass the document through without canonicalization")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output format for the resolved document (json, yaml)")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("Resolve a document and dump its canonical node tables")
                .arg(
                    Arg::new("path")
                        .help("Path to the document tree (.json, .yaml)")
                        .required(true)
                        .index(1),
                )
                .arg(config_arg)
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Table dump format (defaults to report.format from the config)"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available table dump formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("resolve", resolve_matches)) => handle_resolve_command(resolve_matches),
        Some(("table", table_matches)) => handle_table_command(table_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn load_config(matches: &ArgMatches) -> Result<RigrefConfig, String> {
    let mut layers = ConfigLayers::defaults();
    if let Some(path) = matches.get_one::<String>("config") {
        layers = layers.user_file(path);
    }
    if matches
        .try_get_one::<bool>("disable")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
    {
        layers = layers
            .resolver_enabled(false)
            .map_err(|e| e.to_string())?;
    }
    layers.resolve().map_err(|e| e.to_string())
}

/// Load config and document, then run the resolver
fn run_resolver(
    matches: &ArgMatches,
) -> Result<(RigrefConfig, rigref::rigdef::ast::Document, SequentialResolver), String> {
    let config = load_config(matches).map_err(|e| format!("Config error: {e}"))?;
    let path = matches
        .get_one::<String>("path")
        .ok_or_else(|| "missing document path".to_string())?;
    let mut document = DocumentLoader::from_path(path)
        .and_then(|loader| loader.load())
        .map_err(|e| format!("Error loading {path}: {e}"))?;

    let mut resolver = SequentialResolver::new(ResolverOptions::from(&config.resolver));
    resolver.process(&mut document);
    Ok((config, document, resolver))
}

fn report(resolver: &SequentialResolver) -> ExitCode {
    let messages = resolver.format_messages();
    if !messages.is_empty() {
        eprint!("{messages}");
    }
    eprintln!("{}", resolver.diagnostics().summary());
    if resolver.error_count() > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Handle the resolve command
fn handle_resolve_command(matches: &ArgMatches) -> ExitCode {
    let (config, document, resolver) = match run_resolver(matches) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("json");
    let serialized = DocumentFormat::from_name(output)
        .and_then(|format| write_document(&document, format));
    match serialized {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => {
            eprintln!("Output error: {e}");
            return ExitCode::from(2);
        }
    }

    if config.report.dump_table {
        if let Err(e) = print_tables(&resolver, &config.report.format) {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    }
    report(&resolver)
}

/// Handle the table command
fn handle_table_command(matches: &ArgMatches) -> ExitCode {
    let (config, _document, resolver) = match run_resolver(matches) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or(config.report.format);

    if let Err(e) = print_tables(&resolver, &format) {
        eprintln!("{e}");
        return ExitCode::from(2);
    }
    report(&resolver)
}

fn print_tables(resolver: &SequentialResolver, format: &str) -> Result<(), String> {
    let output = FormatRegistry::builtin()
        .render(resolver.tables(), format)
        .map_err(|e| format!("Format error: {e}"))?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() -> ExitCode {
    println!("Available table formats:\n");
    for (name, description) in FormatRegistry::builtin().formats() {
        println!("  {name}");
        println!("    {description}");
    }
    ExitCode::SUCCESS
}
