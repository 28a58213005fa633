//! Grammar to epsilon-NFA translation.
//!
//! Every grammar non-terminal becomes one NFA state, named in first-encounter
//! order: left-hand sides first, in production order, then any right-hand
//! side non-terminal not yet seen, interleaved as construction reaches it.
//! One reserved accepting sink (`qF`) is added outside that sequence; it is
//! the only accepting state.
//!
//! Per alternative of each production `X -> …`:
//!
//! - `e` adds an epsilon transition from `X` to the sink;
//! - a terminal `a` adds a transition on `a` from `X` to the sink;
//! - `aB` adds a transition on `a` from `X` to `B`'s state.
//!
//! Alternatives sharing an origin and a leading terminal accumulate into one
//! destination set. That is genuine non-determinism, resolved later by the
//! subset construction, never collapsed here.

use super::{Label, Nfa, StateId};
use crate::grammar::namer::StateNamer;
use crate::grammar::{Alternative, Grammar};

/// Name of the reserved accepting sink. It cannot collide with minted
/// identifiers, which are always `q` followed by digits.
const ACCEPT_NAME: &str = "qF";

/// Translates a [`Grammar`] into an epsilon-NFA, owning the namer for the
/// duration of one construction pass.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    namer: StateNamer<String>,
}

impl NfaBuilder {
    /// Create a builder with a fresh namer.
    pub fn new() -> Self {
        NfaBuilder {
            namer: StateNamer::new(),
        }
    }

    /// Build the epsilon-NFA for `grammar`.
    ///
    /// The first production's origin becomes the initial state. An empty
    /// grammar yields an automaton that accepts nothing: a fresh initial
    /// state, the sink, and no transitions.
    pub fn build(mut self, grammar: &Grammar) -> Nfa {
        // Name all left-hand sides before any right-hand side non-terminal.
        for production in grammar.productions() {
            self.namer.name(production.origin().to_string());
        }

        let initial = match grammar.productions().first() {
            Some(first) => self.namer.name(first.origin().to_string()),
            None => StateId::named("q0"),
        };
        let accept = StateId::named(ACCEPT_NAME);

        let mut nfa = Nfa::new(initial);
        nfa.mark_accepting(accept.clone());

        for production in grammar.productions() {
            let origin = self.namer.name(production.origin().to_string());
            for alternative in production.alternatives() {
                match alternative {
                    Alternative::Empty => {
                        nfa.add_transition(origin.clone(), Label::Epsilon, accept.clone());
                    }
                    Alternative::Terminal(symbol) => {
                        nfa.add_transition(origin.clone(), Label::Symbol(*symbol), accept.clone());
                    }
                    Alternative::Step(symbol, non_terminal) => {
                        let destination = self.namer.name(non_terminal.clone());
                        nfa.add_transition(origin.clone(), Label::Symbol(*symbol), destination);
                    }
                }
            }
        }

        nfa
    }
}

impl Nfa {
    /// Build the epsilon-NFA for `grammar` with a fresh [`NfaBuilder`].
    pub fn from_grammar(grammar: &Grammar) -> Nfa {
        NfaBuilder::new().build(grammar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Automaton;

    fn sample_grammar() -> Grammar {
        Grammar::parse("S -> aA | b\nA -> a | e").unwrap()
    }

    #[test]
    fn left_hand_sides_are_named_first() {
        // S and A both appear on the left, so they take q0 and q1 even
        // though A is also referenced on a right-hand side.
        let nfa = Nfa::from_grammar(&sample_grammar());
        assert_eq!(nfa.initial().name(), "q0");

        let expected: Vec<&str> = vec!["q0", "q1", "qF"];
        let names: Vec<&str> = nfa.states().iter().map(StateId::name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn right_hand_side_non_terminals_are_minted_interleaved() {
        let grammar = Grammar::parse("S -> aB\nA -> b").unwrap();
        let nfa = Nfa::from_grammar(&grammar);
        // LHS pass: S = q0, A = q1; then B is first seen on a RHS.
        assert!(nfa
            .targets(&"q0".into(), &Label::Symbol('a'))
            .unwrap()
            .contains(&"q2".into()));
    }

    #[test]
    fn alternatives_map_to_the_three_edge_shapes() {
        let nfa = Nfa::from_grammar(&sample_grammar());

        // S -> aA
        assert!(nfa
            .targets(&"q0".into(), &Label::Symbol('a'))
            .unwrap()
            .contains(&"q1".into()));
        // S -> b
        assert!(nfa
            .targets(&"q0".into(), &Label::Symbol('b'))
            .unwrap()
            .contains(&"qF".into()));
        // A -> a
        assert!(nfa
            .targets(&"q1".into(), &Label::Symbol('a'))
            .unwrap()
            .contains(&"qF".into()));
        // A -> e
        assert!(nfa
            .targets(&"q1".into(), &Label::Epsilon)
            .unwrap()
            .contains(&"qF".into()));

        assert_eq!(nfa.alphabet().iter().collect::<Vec<_>>(), vec![&'a', &'b']);
        assert_eq!(nfa.accepting().iter().count(), 1);
    }

    #[test]
    fn shared_leading_terminal_accumulates_destinations() {
        let grammar = Grammar::parse("S -> aA | aB | a\nA -> a\nB -> b").unwrap();
        let nfa = Nfa::from_grammar(&grammar);
        let targets = nfa.targets(&"q0".into(), &Label::Symbol('a')).unwrap();
        // A, B and the sink: three distinct destinations on one symbol.
        assert_eq!(targets.len(), 3);
    }

    #[test]
    fn empty_grammar_accepts_nothing() {
        let nfa = Nfa::from_grammar(&Grammar::default());
        assert_eq!(nfa.initial().name(), "q0");
        assert!(nfa.alphabet().is_empty());
        assert!(!nfa.accepting().contains(nfa.initial()));
    }
}
