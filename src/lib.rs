//! # libregular
//!
//! Regular-language toolkit built on finite automata.
//!
//! The library converts a right-linear (type-3) grammar into an epsilon-NFA,
//! determinizes it with the subset construction, and derives the reversed and
//! complement automata. Membership queries drive the resulting DFA directly.
//!
//! ## Example
//!
//! ```rust
//! use libregular::prelude::*;
//!
//! let grammar = Grammar::parse("S -> aA | b\nA -> a | e").unwrap();
//! let dfa = Nfa::from_grammar(&grammar).determinize();
//!
//! assert_eq!(dfa.accepts("aa"), Ok(true));
//! assert_eq!(dfa.accepts("ab"), Ok(false));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod grammar;

#[cfg(feature = "serialization")]
pub mod serialization;

/// Interactive membership-check loop
#[cfg(feature = "repl")]
pub mod repl;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::accept::AcceptError;
    pub use crate::automaton::builder::NfaBuilder;
    pub use crate::automaton::{Automaton, Dfa, Label, Nfa, StateId};
    pub use crate::grammar::namer::StateNamer;
    pub use crate::grammar::{Alternative, Grammar, GrammarError, Production};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        AutomatonSerializer, JsonSerializer, Report, ReportError, ReportKind,
        TextReportSerializer,
    };
}
