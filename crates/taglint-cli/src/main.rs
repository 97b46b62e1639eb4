use clap::{Parser, Subcommand};
use std::path::Path;
use taglint_patch::LineRange;

#[derive(Parser)]
#[command(name = "taglint")]
#[command(about = "Structural balance checks and line-range patching for markup sources")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that every opening tag has a matching, correctly nested closing tag
    Check {
        /// Input file
        path: String,
    },

    /// Check that {}, () and [] are balanced
    Braces {
        /// Input file
        path: String,
    },

    /// Replace a line range with the given lines (no lines deletes the range)
    Replace {
        /// File to patch
        path: String,
        /// First line to replace (1-based, inclusive)
        start: usize,
        /// Last line to replace (inclusive)
        end: usize,
        /// Replacement lines
        lines: Vec<String>,
    },

    /// Insert lines so the first one lands at the given line number
    Insert {
        /// File to patch
        path: String,
        /// Target line number (one past the last line appends)
        line: usize,
        /// Lines to insert
        lines: Vec<String>,
    },

    /// Move a line range to sit after another line
    Move {
        /// File to patch
        path: String,
        /// First line of the block (1-based, inclusive)
        start: usize,
        /// Last line of the block (inclusive)
        end: usize,
        /// Line to place the block after (0 moves it to the top)
        after: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { path } => cmd_check(&path),
        Command::Braces { path } => cmd_braces(&path),
        Command::Replace {
            path,
            start,
            end,
            lines,
        } => cmd_replace(&path, start, end, &lines),
        Command::Insert { path, line, lines } => cmd_insert(&path, line, &lines),
        Command::Move {
            path,
            start,
            end,
            after,
        } => cmd_move(&path, start, end, after),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(path: &str) {
    let source = read_source(path);

    match taglint_balance::check_source(&source) {
        Ok(()) => println!("Structure seems balanced."),
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_braces(path: &str) {
    let source = read_source(path);

    let issues = taglint_balance::check_braces(&source);
    if issues.is_empty() {
        println!("Braces verified balanced.");
        return;
    }
    for issue in &issues {
        println!("Error: {issue}");
    }
    std::process::exit(1);
}

fn cmd_replace(path: &str, start: usize, end: usize, lines: &[String]) {
    let range = LineRange::new(start, end);
    if let Err(e) = taglint_patch::replace_range(Path::new(path), range, lines) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    println!("Replaced lines {start}-{end} with {} line(s).", lines.len());
}

fn cmd_insert(path: &str, line: usize, lines: &[String]) {
    if let Err(e) = taglint_patch::insert_at(Path::new(path), line, lines) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    println!("Inserted {} line(s) at line {line}.", lines.len());
}

fn cmd_move(path: &str, start: usize, end: usize, after: usize) {
    let range = LineRange::new(start, end);
    if let Err(e) = taglint_patch::move_range(Path::new(path), range, after) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    println!("Moved lines {start}-{end} to after line {after}.");
}
