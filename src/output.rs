use colored::Colorize;
use serde::Serialize;
use std::sync::OnceLock;
use tabled::{Table, Tabled};

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub verbosity: Verbosity,
}

static SETTINGS: OnceLock<OutputSettings> = OnceLock::new();

/// Initialize global output settings
pub fn init(format: OutputFormat, verbosity: Verbosity, color: bool) {
    let _ = SETTINGS.set(OutputSettings { format, verbosity });
    if !color {
        colored::control::set_override(false);
    }
}

fn settings() -> OutputSettings {
    SETTINGS.get().copied().unwrap_or_default()
}

pub fn format() -> OutputFormat {
    settings().format
}

pub fn is_json() -> bool {
    format() == OutputFormat::Json
}

fn is_quiet() -> bool {
    matches!(settings().verbosity, Verbosity::Quiet)
}

fn is_verbose() -> bool {
    matches!(settings().verbosity, Verbosity::Verbose)
}

fn should_show_status() -> bool {
    if is_quiet() {
        return false;
    }
    if is_json() && !is_verbose() {
        return false;
    }
    true
}

/// Print rows as a table, or the given data as JSON in JSON mode
pub fn print_list<T: Tabled, D: Serialize + ?Sized>(rows: &[T], data: &D) -> Result<(), serde_json::Error> {
    if is_json() {
        return print_json(data);
    }
    print_table(rows);
    Ok(())
}

/// Print data as a table
pub fn print_table<T: Tabled>(items: &[T]) {
    if items.is_empty() {
        println!("{}", "No results".dimmed());
        return;
    }
    let table = Table::new(items);
    println!("{}", table);
}

/// Print data as JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

/// Print a status/info line (suppressed in quiet mode or JSON mode unless verbose)
pub fn print_status(message: &str) {
    if should_show_status() {
        println!("{}", message);
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", "error".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    if !is_quiet() {
        eprintln!("{}: {}", "warning".yellow().bold(), message);
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    if should_show_status() {
        println!("{}: {}", "success".green().bold(), message);
    }
}

/// Print primary output without suppression
pub fn print_raw(message: &str) {
    println!("{}", message);
}
