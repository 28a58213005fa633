//! Right-linear grammar model.
//!
//! A grammar is a flat, ordered list of productions
//! `origin -> alternative (| alternative)*` where each alternative is one of:
//!
//! - the empty marker `e`,
//! - a single terminal symbol, or
//! - a terminal symbol immediately followed by one non-terminal symbol.
//!
//! Anything else is a [`GrammarError::MalformedProduction`], which aborts the
//! whole pipeline: no partial automaton is usable past a bad production.
//!
//! # Input format
//!
//! [`Grammar::parse`] consumes a text stream of lines. A line participates in
//! the grammar iff it contains the `->` separator; the left side is the
//! trimmed non-terminal name and the right side is one or more alternatives
//! separated by `|`, each trimmed.
//!
//! ```text
//! S -> aA | b
//! A -> a | e
//! ```

pub mod namer;

use thiserror::Error;

/// The literal marker for an empty right-hand side.
pub const EMPTY_MARKER: &str = "e";

/// The production separator in grammar text.
pub const SEPARATOR: &str = "->";

/// Errors raised while interpreting a grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// An alternative is neither the empty marker, a single terminal, nor a
    /// terminal followed by a non-terminal.
    ///
    /// This is a fatal input error: it correctly rejects productions a
    /// right-linear grammar cannot contain.
    #[error("malformed production `{origin} {SEPARATOR} {alternative}`: \
             expected `{EMPTY_MARKER}`, a terminal, or a terminal followed by a non-terminal")]
    MalformedProduction {
        /// The production's left-hand side.
        origin: String,
        /// The offending alternative text.
        alternative: String,
    },
}

/// One alternative of a production's right-hand side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alternative {
    /// The empty marker `e`: the origin derives the empty string.
    Empty,
    /// A single terminal symbol.
    Terminal(char),
    /// A terminal symbol followed by a non-terminal.
    Step(char, String),
}

impl Alternative {
    /// Classify one trimmed alternative, or fail with
    /// [`GrammarError::MalformedProduction`].
    fn classify(origin: &str, text: &str) -> Result<Self, GrammarError> {
        if text == EMPTY_MARKER {
            return Ok(Alternative::Empty);
        }
        let mut symbols = text.chars();
        match (symbols.next(), symbols.next(), symbols.next()) {
            (Some(terminal), None, _) => Ok(Alternative::Terminal(terminal)),
            (Some(terminal), Some(non_terminal), None) => {
                Ok(Alternative::Step(terminal, non_terminal.to_string()))
            }
            _ => Err(GrammarError::MalformedProduction {
                origin: origin.to_string(),
                alternative: text.to_string(),
            }),
        }
    }
}

/// A production: one origin non-terminal and its alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    origin: String,
    alternatives: Vec<Alternative>,
}

impl Production {
    /// Create a production from already-classified alternatives.
    pub fn new(origin: impl Into<String>, alternatives: Vec<Alternative>) -> Self {
        Production {
            origin: origin.into(),
            alternatives,
        }
    }

    /// The left-hand side non-terminal.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The right-hand side alternatives, in source order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }
}

/// An ordered list of right-linear productions, immutable after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grammar {
    productions: Vec<Production>,
}

impl Grammar {
    /// Parse grammar text.
    ///
    /// Lines without the `->` separator are ignored, so headers and blank
    /// lines may appear freely in the input.
    pub fn parse(text: &str) -> Result<Self, GrammarError> {
        let mut productions = Vec::new();
        for line in text.lines() {
            let Some((left, right)) = line.split_once(SEPARATOR) else {
                continue;
            };
            let origin = left.trim().to_string();
            let alternatives = right
                .split('|')
                .map(|alternative| Alternative::classify(&origin, alternative.trim()))
                .collect::<Result<Vec<_>, _>>()?;
            productions.push(Production {
                origin,
                alternatives,
            });
        }
        Ok(Grammar { productions })
    }

    /// Build a grammar directly from productions.
    pub fn from_productions(productions: Vec<Production>) -> Self {
        Grammar { productions }
    }

    /// The productions in source order. The first production's origin is the
    /// grammar's start symbol.
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Whether the grammar has no productions.
    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}
