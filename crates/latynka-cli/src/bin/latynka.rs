use std::path::Path;

use clap::{Parser, Subcommand};

use latynka_cli::commands::{accuracy_ops, romanize_ops, table_ops};

#[derive(Parser)]
#[command(name = "latynka", about = "Ukrainian Cyrillic to Latynka transliteration")]
struct Cli {
    /// Use this transliteration table (TOML) instead of the built-in one
    #[arg(long, global = true)]
    table: Option<String>,
    /// Write JSON trace logs into this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Romanize text given as an argument, read from a file, or from stdin
    Romanize {
        /// Text to romanize
        text: Option<String>,
        /// Read the text from this file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<String>,
    },
    /// Show what every rule did to a text
    Explain {
        /// Text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in transliteration table
    ExportTable,
    /// Check a transliteration table file
    ValidateTable {
        /// Table file (TOML)
        file: String,
    },
    /// Run romanization accuracy tests from a TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Filter by category (only run cases in this category)
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = cli.trace_dir.as_deref() {
        if !latynka_engine::tracing_available() {
            eprintln!("warning: built without the `trace` feature, ignoring --trace-dir");
        }
        latynka_engine::init_tracing(Path::new(dir));
    }
    if let Some(table) = cli.table.as_deref() {
        table_ops::install_table(table);
    }

    match cli.command {
        Command::Romanize { text, file } => {
            romanize_ops::romanize_cmd(text.as_deref(), file.as_deref())
        }
        Command::Explain { text, json } => romanize_ops::explain_cmd(&text, json),
        Command::ExportTable => table_ops::table_export(),
        Command::ValidateTable { file } => table_ops::table_validate(&file),
        Command::Accuracy {
            corpus_file,
            category,
            verbose,
            json,
        } => accuracy_ops::accuracy(&corpus_file, category.as_deref(), verbose, json),
    }
}
