use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use minic::{
    ast::printer::print_program,
    check_source, display_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse_source,
};

/// Front end for the mini-C language: lexes, parses and checks `int main() { ... }` programs.
#[derive(Parser, Debug)]
#[command(name = "minic")]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source files to check
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each file
    Tokens {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// Parse each file and report syntax errors
    Parse {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Print the parsed program
        #[arg(long)]
        print: bool,
    },
    /// Run every stage on each file (the default)
    Check {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let clean = match &cli.command {
        Some(Commands::Tokens { files }) => for_each_file(files, tokens_file),
        Some(Commands::Parse { files, print }) => {
            for_each_file(files, |path| parse_file(path, *print))
        }
        Some(Commands::Check { files }) => for_each_file(files, check_file),
        None if cli.files.is_empty() => {
            eprintln!("Error: No input file specified");
            eprintln!("Usage: minic <FILE>... or minic check <FILE>...");
            false
        }
        None => for_each_file(&cli.files, check_file),
    };

    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Runs `run` on every file, carrying on past failures. Returns whether every file was clean.
fn for_each_file(files: &[PathBuf], mut run: impl FnMut(&Path) -> Result<bool>) -> bool {
    let mut clean = true;

    for file in files {
        match run(file) {
            Ok(file_clean) => clean &= file_clean,
            Err(error) => {
                eprintln!("Error: {:#}", error);
                clean = false;
            }
        }
        println!("---");
    }

    clean
}

fn read_source(path: &Path) -> Result<String> {
    read_to_string(path).with_context(|| format!("{} could not be read", path.display()))
}

fn tokens_file(path: &Path) -> Result<bool> {
    let source = read_source(path)?;
    println!("Tokenizing {}...", path.display());

    let start = Instant::now();
    let tokens = tokenize(&source);
    let elapsed = start.elapsed();

    let mut unknown = 0;
    for token in &tokens {
        if token.kind == TokenKind::Unknown {
            unknown += 1;
            eprintln!("{}", token);
        } else {
            println!("{}", token);
        }
    }

    println!("Tokenized in {:?}", elapsed);
    println!("{} tokens, {} unknown", tokens.len(), unknown);

    Ok(unknown == 0)
}

fn parse_file(path: &Path, print: bool) -> Result<bool> {
    let source = read_source(path)?;
    let file_name = path.display().to_string();
    println!("Parsing {}...", file_name);

    let start = Instant::now();
    let parsed = parse_source(&source);
    let elapsed = start.elapsed();

    for error in &parsed.errors {
        eprint!("{}", display_error(error, &source, &file_name));
    }
    if print {
        print!("{}", print_program(&parsed.program));
    }

    println!("Parsed in {:?}", elapsed);
    println!(
        "{} syntax errors, {} unknown tokens",
        parsed.error_count(),
        parsed.lexical_errors
    );

    Ok(parsed.error_count() == 0 && parsed.lexical_errors == 0)
}

fn check_file(path: &Path) -> Result<bool> {
    let source = read_source(path)?;
    let file_name = path.display().to_string();
    println!("Analyzing {}...", file_name);

    let start = Instant::now();
    let report = check_source(&source);
    let elapsed = start.elapsed();

    for error in &report.parsed.errors {
        eprint!("{}", display_error(error, &source, &file_name));
    }
    report
        .semantic
        .write_diagnostics(&mut io::stderr())
        .context("failed to write diagnostics")?;

    info!("{}: {} errors", file_name, report.total_errors());
    println!("Analyzed in {:?}", elapsed);
    println!(
        "{} unknown tokens, {} syntax errors, {} semantic errors",
        report.lexical_errors(),
        report.syntax_errors(),
        report.semantic_errors()
    );

    Ok(report.is_clean())
}
