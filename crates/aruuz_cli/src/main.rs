//! Command-line interface for the aruuz meter detection engine.
//!
//! Reads verse from arguments, a file, or stdin, and prints per-line
//! results as text or JSON. The couplet's dominant meter is marked.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use aruuz_scan::{LineResult, ScanOptions, Scanner};

#[derive(Parser)]
#[command(name = "aruuz")]
#[command(about = "Identify the classical meter (bahr) of Urdu verse", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a couplet and report its meter
    Scan {
        /// Lines of verse; omit to read a file or stdin
        lines: Vec<String>,

        /// Read verse from a file, one misra per line
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Per-line node budget for the scansion tree
        #[arg(long, default_value_t = 100_000)]
        budget: usize,
    },
    /// List the meter catalogue
    Meters {
        /// Only entries whose name contains this text
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Scan {
            lines,
            file,
            json,
            budget,
        } => {
            let input = gather_lines(lines, file)?;
            let options = ScanOptions {
                node_budget: budget,
                ..ScanOptions::default()
            };
            let scanner = Scanner::new(options)?;
            let refs: Vec<&str> = input.iter().map(String::as_str).collect();
            let results = scanner.scan(&refs);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results);
            }
        }
        Commands::Meters { name } => {
            let scanner = Scanner::new(ScanOptions::default())?;
            let catalogue = scanner.catalogue();
            for i in 0..catalogue.len() {
                let meter_name = catalogue.name(i);
                if let Some(filter) = &name {
                    if !meter_name.contains(filter.as_str()) {
                        continue;
                    }
                }
                println!("{meter_name}");
                println!("    {}", catalogue.feet(i));
                println!("    {}", catalogue.pattern(i));
            }
        }
    }
    Ok(())
}

fn gather_lines(
    lines: Vec<String>,
    file: Option<PathBuf>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if !lines.is_empty() {
        return Ok(lines);
    }
    let text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

fn print_results(results: &[LineResult]) {
    if results.is_empty() {
        println!("no scannable input");
        return;
    }

    let mut current_line: Option<&str> = None;
    for result in results {
        if current_line != Some(result.line.as_str()) {
            current_line = Some(result.line.as_str());
            println!("{}", result.line);
        }
        let marker = if result.is_dominant { " *" } else { "" };
        let partial = if result.partial { " (partial)" } else { "" };
        println!("  {}{marker}{partial}", result.meter_name);
        if !result.feet.is_empty() {
            println!("    {}", result.feet);
        }
        println!("    {}", result.full_code);
        println!("    {}", result.word_taqti.join(" | "));
    }
}
