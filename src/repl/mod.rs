//! Interactive membership checking.
//!
//! Reads one candidate string per line and prints the DFA's verdict, the way
//! the original pipeline prompted for a string after writing its reports.

use crate::automaton::{Automaton, Dfa};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the membership loop until EOF, interrupt, or `:q`.
pub fn run(dfa: &Dfa) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("Type a string to test it, :q to quit. An empty line tests the empty string.");

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let input = line.trim();
                if input == ":q" {
                    break;
                }
                editor.add_history_entry(input)?;
                report(dfa, input);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn report(dfa: &Dfa, input: &str) {
    match dfa.run(input) {
        Ok(last) if dfa.accepting().contains(&last) => {
            println!("{} (final state {})", "accepted".green().bold(), last);
        }
        Ok(last) => {
            println!("{} (final state {})", "rejected".red().bold(), last);
        }
        Err(reason) => {
            println!("{}: {}", "rejected".red().bold(), reason);
        }
    }
}
