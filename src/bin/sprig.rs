//! Command-line interface for sprig
//! This binary tokenizes and parses sprig source files into different output formats.
//!
//! Usage:
//!   sprig execute `<path>` [--format `<format>`]  - Process a file and print the result
//!   sprig check `<path>`                          - Parse a file and report success or the error
//!   sprig list-formats                            - List all available format strings

use clap::{Arg, Command};

use sprig::sprig::parser::parse_source;
use sprig::sprig::processor::{available_formats, process_source};

fn main() {
    let matches = Command::new("sprig")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and parsing sprig source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("execute")
                .about("Process a sprig file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the sprig file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-sexpr', 'token-simple')")
                        .default_value("ast-sexpr"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a sprig file and report success or the first error")
                .arg(
                    Arg::new("path")
                        .help("Path to the sprig file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available format strings"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("execute", execute_matches)) => {
            let path = execute_matches.get_one::<String>("path").unwrap();
            let format = execute_matches.get_one::<String>("format").unwrap();
            handle_execute_command(path, format);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the execute command
fn handle_execute_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let output = process_source(&source, format).unwrap_or_else(|e| {
        eprintln!("Execution error: {}", e);
        std::process::exit(1);
    });

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    match parse_source(&source) {
        Ok(exprs) => {
            println!("{}: {} top-level expressions", path, exprs.len());
        }
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available format strings:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
