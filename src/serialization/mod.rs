//! Automaton serialization support.
//!
//! Any automaton reduces to a [`Report`]: the five informational blocks
//! Q, Sigma, q0, delta and F plus a [`ReportKind`] header, every block in
//! sorted order so output is reproducible. Serializers encode reports, not
//! machine types, so one writer/reader pair covers NFAs and DFAs alike, and
//! a report read back reconstructs an automaton with identical behavior.
//!
//! # Example
//!
//! ```rust,ignore
//! use libregular::prelude::*;
//! use std::fs::File;
//!
//! let report = Report::from_automaton(&dfa, ReportKind::Dfa);
//! TextReportSerializer::serialize(&report, File::create("DFA.txt")?)?;
//!
//! let back = TextReportSerializer::deserialize(File::open("DFA.txt")?)?;
//! let dfa2 = back.to_dfa()?;
//! ```

mod json_impl;
mod report_impl;

pub use self::json_impl::JsonSerializer;
pub use self::report_impl::TextReportSerializer;

use crate::automaton::{Automaton, Dfa, Label, Nfa, StateId};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Which automaton of the pipeline a report describes. Selects the header
/// line of the text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    /// The epsilon-NFA translated from the grammar.
    OriginalNfa,
    /// The DFA produced by the subset construction.
    Dfa,
    /// The epsilon-NFA for the reversed language.
    ReversedNfa,
    /// The totalized DFA for the complement language.
    ComplementDfa,
}

impl ReportKind {
    /// The header line of the text format, without the leading `#`.
    pub fn header(&self) -> &'static str {
        match self {
            ReportKind::OriginalNfa => "NFA translated from the grammar",
            ReportKind::Dfa => "DFA built by subset construction",
            ReportKind::ReversedNfa => "NFA for the reversed language",
            ReportKind::ComplementDfa => "DFA for the complement language",
        }
    }

    fn from_header(header: &str) -> Option<Self> {
        [
            ReportKind::OriginalNfa,
            ReportKind::Dfa,
            ReportKind::ReversedNfa,
            ReportKind::ComplementDfa,
        ]
        .into_iter()
        .find(|kind| kind.header() == header)
    }
}

/// Errors raised while encoding or decoding automaton reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// I/O error
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Error during JSON encoding or decoding
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// A text report line could not be interpreted.
    #[error("malformed report at line {line}: {message}")]
    Parse {
        /// One-based line number in the report.
        line: usize,
        /// What was expected or found.
        message: String,
    },

    /// The report does not describe a valid automaton of the requested kind.
    #[error("invalid automaton: {0}")]
    InvalidAutomaton(String),
}

/// Serializes and deserializes automaton [`Report`]s.
pub trait AutomatonSerializer {
    /// Write a report.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(report: &Report, writer: W) -> Result<(), ReportError>;

    /// Read a report back.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails.
    fn deserialize<R: Read>(reader: R) -> Result<Report, ReportError>;
}

/// The five informational blocks of an automaton, plus the kind header.
///
/// States and labels are plain strings here: the dead state is the literal
/// `Dead` and the epsilon label is the literal `e`, exactly as in the text
/// format. [`Report::to_nfa`] and [`Report::to_dfa`] map them back to the
/// tagged representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Which automaton this is.
    pub kind: ReportKind,
    /// Sorted state names (Q).
    pub states: Vec<String>,
    /// Sorted alphabet (Sigma).
    pub alphabet: Vec<char>,
    /// Initial state name (q0).
    pub initial: String,
    /// Sorted `(origin, label, destination)` triples (delta).
    pub transitions: Vec<(String, String, String)>,
    /// Sorted accepting state names (F).
    pub accepting: Vec<String>,
}

/// The epsilon label in serialized form.
const EPSILON_TEXT: &str = "e";

fn state_text(state: &StateId) -> String {
    state.name().to_string()
}

fn state_from_text(text: &str) -> StateId {
    if text == "Dead" {
        StateId::Dead
    } else {
        StateId::named(text)
    }
}

impl Report {
    /// Build the report of any automaton. All blocks come out sorted because
    /// the underlying collections iterate in sorted order.
    pub fn from_automaton<A: Automaton>(automaton: &A, kind: ReportKind) -> Self {
        Report {
            kind,
            states: automaton.states().iter().map(state_text).collect(),
            alphabet: automaton.alphabet().iter().copied().collect(),
            initial: state_text(automaton.initial()),
            transitions: automaton
                .edges()
                .into_iter()
                .map(|(from, label, to)| {
                    (state_text(&from), label.to_string(), state_text(&to))
                })
                .collect(),
            accepting: automaton.accepting().iter().map(state_text).collect(),
        }
    }

    /// Reconstruct a non-deterministic automaton from this report.
    ///
    /// # Errors
    ///
    /// Fails if a transition label is neither `e` nor a single symbol.
    pub fn to_nfa(&self) -> Result<Nfa, ReportError> {
        let mut nfa = Nfa::new(state_from_text(&self.initial));
        for state in &self.states {
            nfa.insert_state(state_from_text(state));
        }
        for &symbol in &self.alphabet {
            nfa.insert_symbol(symbol);
        }
        for (from, label_text, to) in &self.transitions {
            let label = if label_text == EPSILON_TEXT {
                Label::Epsilon
            } else {
                Label::Symbol(single_symbol(label_text)?)
            };
            nfa.add_transition(state_from_text(from), label, state_from_text(to));
        }
        for state in &self.accepting {
            nfa.mark_accepting(state_from_text(state));
        }
        Ok(nfa)
    }

    /// Reconstruct a deterministic automaton from this report.
    ///
    /// # Errors
    ///
    /// Fails if a label is the epsilon marker, not a single symbol, or if
    /// two transitions leave the same state on the same symbol.
    pub fn to_dfa(&self) -> Result<Dfa, ReportError> {
        let mut dfa = Dfa::new(state_from_text(&self.initial));
        for state in &self.states {
            dfa.insert_state(state_from_text(state));
        }
        for &symbol in &self.alphabet {
            dfa.insert_symbol(symbol);
        }
        for (from, label_text, to) in &self.transitions {
            if label_text == EPSILON_TEXT {
                return Err(ReportError::InvalidAutomaton(format!(
                    "epsilon transition from `{from}` in a deterministic automaton"
                )));
            }
            let symbol = single_symbol(label_text)?;
            let origin = state_from_text(from);
            if dfa.target(&origin, symbol).is_some() {
                return Err(ReportError::InvalidAutomaton(format!(
                    "duplicate transition ({from}, {symbol})"
                )));
            }
            dfa.set_transition(origin, symbol, state_from_text(to));
        }
        for state in &self.accepting {
            dfa.mark_accepting(state_from_text(state));
        }
        Ok(dfa)
    }
}

fn single_symbol(text: &str) -> Result<char, ReportError> {
    let mut symbols = text.chars();
    match (symbols.next(), symbols.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(ReportError::InvalidAutomaton(format!(
            "transition label `{text}` is not a single symbol"
        ))),
    }
}
