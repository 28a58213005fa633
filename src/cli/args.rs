//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "libregular")]
#[command(about = "Right-linear grammars to finite automata")]
#[command(version)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Build NFA, DFA, reversed and complement automata and write their reports
    Compile {
        /// Grammar file (one `origin -> alternatives` production per line)
        grammar: PathBuf,

        /// Directory for NFA, DFA, REV and COMP report files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Report encoding
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check whether a string belongs to the grammar's language
    Check {
        /// Grammar file
        grammar: PathBuf,

        /// Input string to test
        input: String,
    },

    /// Interactively test strings against the grammar's language
    Repl {
        /// Grammar file
        grammar: PathBuf,
    },
}

/// Encoding of the written reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Five-block human-readable report
    Text,
    /// Pretty-printed JSON report
    Json,
}

impl OutputFormat {
    /// File extension for reports in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}
