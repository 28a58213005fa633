//! CLI for the libregular toolkit.
//!
//! Compiles a right-linear grammar into its NFA, DFA, reversed and complement
//! automata, writes their reports, and answers membership queries.

use clap::Parser;
use libregular::cli::{commands, Cli};

fn main() -> anyhow::Result<()> {
    commands::run(Cli::parse())
}
