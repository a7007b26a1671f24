//! Command-line interface for lison
//! This binary is used to inspect, validate and canonicalize lison files.
//!
//! Usage:
//!   lison execute `<path>` [--format `<stage-format>`]  - Print a file in the given format
//!   lison check `<path>`...                            - Report whether each file holds a well-formed object
//!   lison format `<path>` [--write]                    - Print (or write back) the canonical rendering
//!   lison list-formats                               - List all available formats

use clap::{Arg, ArgAction, Command};
use lison::lison::formats::render;
use lison::lison::parser::parse_source;
use lison::lison::processor::{process_file, ProcessingSpec};
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = Command::new("lison")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and processing lison files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("execute")
                .about("Print a lison file in the given format")
                .arg(
                    Arg::new("path")
                        .help("Path to the lison file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-lison', 'ast-treeviz', 'token-json')")
                        .default_value("ast-lison"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check that files hold a well-formed lison object")
                .arg(
                    Arg::new("paths")
                        .help("Paths to the lison files")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Canonicalize a lison file")
                .arg(
                    Arg::new("path")
                        .help("Path to the lison file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("write")
                        .long("write")
                        .short('w')
                        .help("Write the result back into the file instead of printing it")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("execute", execute_matches)) => {
            let path = execute_matches
                .get_one::<String>("path")
                .expect("path is required");
            let format = execute_matches
                .get_one::<String>("format")
                .expect("format has a default");
            handle_execute_command(path, format)
        }
        Some(("check", check_matches)) => {
            let paths: Vec<&String> = check_matches
                .get_many::<String>("paths")
                .expect("paths are required")
                .collect();
            handle_check_command(&paths)
        }
        Some(("format", format_matches)) => {
            let path = format_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_format_command(path, format_matches.get_flag("write"))
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

/// Handle the execute command
fn handle_execute_command(path: &str, format: &str) -> ExitCode {
    let spec = match ProcessingSpec::from_string(format) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match process_file(path, &spec) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Execution error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Handle the check command
fn handle_check_command(paths: &[&String]) -> ExitCode {
    let mut failed = false;

    for path in paths {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("error: {}: {}", path, e);
                failed = true;
                continue;
            }
        };

        if parse_source(&source).is_error() {
            println!("error: {}", path);
            failed = true;
        } else {
            println!("ok: {}", path);
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Handle the format command
fn handle_format_command(path: &str, write: bool) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let object = parse_source(&source);
    if object.is_error() {
        eprintln!("Error: {} does not hold a well-formed lison object", path);
        return ExitCode::FAILURE;
    }

    let output = render(&object);
    if !write {
        println!("{}", output);
        return ExitCode::SUCCESS;
    }

    match std::fs::write(path, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: cannot write {}: {}", path, e);
            ExitCode::FAILURE
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() -> ExitCode {
    println!("Available formats:\n");
    for spec in ProcessingSpec::available_specs() {
        println!("  {}", spec.name());
    }
    ExitCode::SUCCESS
}
