//! CLI entry point.
//!
//! # Responsibility
//! - Expose the core counting operations as small subcommands.
//! - Keep output deterministic so runs are easy to diff and script.

use log::info;
use std::process::ExitCode;
use textstat_core::{
    analyze, core_version, default_log_level, init_logging, missing_item_lines, read_document,
    read_document_lossy, tally_dir, tokens, Document, TextStatistics,
};

const USAGE: &str = "\
Usage: textstat [--log-dir <abs-dir>] <command> [args]

Commands:
  stats <file> [--json] [--lossy] [--list-words] [--show-content]
      Print line/word/character statistics for one text file.
  scan <dir>
      Count files and directories directly inside <dir>.
  inventory <list> [--prefix <char>]
      Split a comma-separated list and print an availability line for
      every item not starting with <char> (default: a).
  --version
      Print the core crate version.";

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(log_dir) = take_flag_value(&mut args, "--log-dir") {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("textstat: {message}");
            return ExitCode::FAILURE;
        }
    }

    let Some(command) = args.first().cloned() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };
    let rest = args.split_off(1);

    match command.as_str() {
        "stats" => run_stats(rest),
        "scan" => run_scan(rest),
        "inventory" => run_inventory(rest),
        "--version" => {
            println!("textstat {}", core_version());
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("textstat: unknown command `{other}`\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run_stats(mut args: Vec<String>) -> ExitCode {
    let as_json = take_flag(&mut args, "--json");
    let lossy = take_flag(&mut args, "--lossy");
    let list_words = take_flag(&mut args, "--list-words");
    let show_content = take_flag(&mut args, "--show-content");

    let Some(path) = single_positional(args, "stats") else {
        return ExitCode::from(2);
    };

    let document = match read_path(&path, lossy) {
        Ok(document) => document,
        Err(message) => {
            eprintln!("textstat: {message}");
            return ExitCode::FAILURE;
        }
    };

    let report = analyze(&document);
    info!(
        "event=stats_run module=cli status=ok path={path} words={} lines={}",
        report.words, report.lines
    );

    if show_content {
        print!("{}", document.content());
        if !document.content().ends_with('\n') && !document.is_empty() {
            println!();
        }
    }

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("textstat: failed to encode report: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&path, &report);
    }

    if list_words {
        for token in tokens(&document) {
            println!("{token}");
        }
    }

    ExitCode::SUCCESS
}

fn run_scan(args: Vec<String>) -> ExitCode {
    let Some(path) = single_positional(args, "scan") else {
        return ExitCode::from(2);
    };

    match tally_dir(&path) {
        Ok(tally) => {
            println!("You have {} files and {} directories.", tally.files, tally.dirs);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("textstat: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_inventory(mut args: Vec<String>) -> ExitCode {
    let prefix = match take_flag_value(&mut args, "--prefix") {
        Some(value) => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    eprintln!("textstat: --prefix expects exactly one character");
                    return ExitCode::from(2);
                }
            }
        }
        None => 'a',
    };

    let Some(list) = single_positional(args, "inventory") else {
        return ExitCode::from(2);
    };

    for line in missing_item_lines(&list, prefix) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}

fn read_path(path: &str, lossy: bool) -> Result<Document, String> {
    let result = if lossy {
        read_document_lossy(path)
    } else {
        read_document(path)
    };
    result.map_err(|err| err.to_string())
}

fn print_report(path: &str, report: &TextStatistics) {
    println!("source: {path}");
    println!("characters: {}", report.characters);
    println!("lines: {}", report.lines);
    println!("newlines: {}", report.newlines);
    println!("words: {}", report.words);
    println!("unique words: {}", report.unique_words);
}

/// Removes `flag` from `args`, returning whether it was present.
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|arg| arg != flag);
    args.len() != before
}

/// Removes `flag <value>` from `args`, returning the value when present.
fn take_flag_value(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let index = args.iter().position(|arg| arg == flag)?;
    if index + 1 >= args.len() {
        return None;
    }
    let value = args.remove(index + 1);
    args.remove(index);
    Some(value)
}

fn single_positional(args: Vec<String>, command: &str) -> Option<String> {
    let mut iter = args.into_iter();
    match (iter.next(), iter.next()) {
        (Some(value), None) if !value.starts_with("--") => Some(value),
        _ => {
            eprintln!("textstat: `{command}` expects exactly one argument\n\n{USAGE}");
            None
        }
    }
}
