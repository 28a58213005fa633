//! Command handlers.

use super::args::{Cli, Commands, OutputFormat};
use crate::automaton::{Automaton, Dfa, Nfa};
use crate::grammar::Grammar;
use crate::serialization::{
    AutomatonSerializer, JsonSerializer, Report, ReportKind, TextReportSerializer,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compile {
            grammar,
            out_dir,
            format,
        } => compile(&grammar, &out_dir, format),
        Commands::Check { grammar, input } => check(&grammar, &input),
        Commands::Repl { grammar } => {
            let dfa = load_dfa(&grammar)?;
            crate::repl::run(&dfa)?;
            Ok(())
        }
    }
}

/// Read and parse the grammar file, then determinize its NFA.
fn load_dfa(path: &Path) -> Result<Dfa> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read grammar file {}", path.display()))?;
    let grammar = Grammar::parse(&text)
        .with_context(|| format!("failed to parse grammar file {}", path.display()))?;
    Ok(Nfa::from_grammar(&grammar).determinize())
}

fn compile(grammar_path: &Path, out_dir: &Path, format: OutputFormat) -> Result<()> {
    let text = fs::read_to_string(grammar_path)
        .with_context(|| format!("failed to read grammar file {}", grammar_path.display()))?;
    let grammar = Grammar::parse(&text)
        .with_context(|| format!("failed to parse grammar file {}", grammar_path.display()))?;

    let nfa = Nfa::from_grammar(&grammar);
    let dfa = nfa.determinize();
    let reversed = dfa.reverse();
    let complemented = dfa.complement();

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    write_report(
        Report::from_automaton(&nfa, ReportKind::OriginalNfa),
        &artifact_path(out_dir, "NFA", format),
        format,
    )?;
    write_report(
        Report::from_automaton(&dfa, ReportKind::Dfa),
        &artifact_path(out_dir, "DFA", format),
        format,
    )?;
    write_report(
        Report::from_automaton(&reversed, ReportKind::ReversedNfa),
        &artifact_path(out_dir, "REV", format),
        format,
    )?;
    write_report(
        Report::from_automaton(&complemented, ReportKind::ComplementDfa),
        &artifact_path(out_dir, "COMP", format),
        format,
    )?;

    println!(
        "Wrote NFA, DFA, REV and COMP reports to {}",
        out_dir.display()
    );
    Ok(())
}

fn artifact_path(out_dir: &Path, stem: &str, format: OutputFormat) -> PathBuf {
    out_dir.join(format!("{stem}.{}", format.extension()))
}

fn write_report(report: Report, path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    match format {
        OutputFormat::Text => TextReportSerializer::serialize(&report, file),
        OutputFormat::Json => JsonSerializer::serialize(&report, file),
    }
    .with_context(|| format!("failed to write report file {}", path.display()))
}

fn check(grammar_path: &Path, input: &str) -> Result<()> {
    let dfa = load_dfa(grammar_path)?;
    match dfa.run(input) {
        Ok(last) if dfa.accepting().contains(&last) => {
            println!(
                "{} {:?} (final state {})",
                "accepted".green().bold(),
                input,
                last
            );
        }
        Ok(last) => {
            println!(
                "{} {:?} (final state {})",
                "rejected".red().bold(),
                input,
                last
            );
        }
        Err(reason) => {
            println!("{} {:?}: {}", "rejected".red().bold(), input, reason);
        }
    }
    Ok(())
}
