//! DFA-driven membership checking.

use super::{Automaton, Dfa, StateId};
use thiserror::Error;

/// Abnormal outcomes of driving a DFA over an input string.
///
/// Accept and reject are both normal results; these errors report inputs the
/// automaton cannot process at all, together with what triggered them.
/// Callers typically treat them as rejection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AcceptError {
    /// The input contains a symbol outside the DFA's alphabet.
    #[error("symbol '{symbol}' is not in the alphabet")]
    SymbolNotInAlphabet {
        /// The offending input symbol.
        symbol: char,
    },

    /// No transition is defined for the current state and symbol. Possible
    /// only on a DFA that has not been totalized.
    #[error("no transition from state `{state}` on '{symbol}'")]
    UndefinedTransition {
        /// The state the run was in.
        state: StateId,
        /// The symbol that had no outgoing transition.
        symbol: char,
    },
}

impl Dfa {
    /// Drive the DFA over `input` and return the final state.
    ///
    /// Evaluation stops at the first symbol that is outside the alphabet or
    /// has no defined transition.
    pub fn run(&self, input: &str) -> Result<StateId, AcceptError> {
        let mut current = self.initial().clone();
        for symbol in input.chars() {
            if !self.alphabet().contains(&symbol) {
                return Err(AcceptError::SymbolNotInAlphabet { symbol });
            }
            match self.target(&current, symbol) {
                Some(next) => current = next.clone(),
                None => {
                    return Err(AcceptError::UndefinedTransition {
                        state: current,
                        symbol,
                    })
                }
            }
        }
        Ok(current)
    }

    /// Whether the DFA accepts `input`: the run consumes the whole string
    /// and ends in an accepting state.
    pub fn accepts(&self, input: &str) -> Result<bool, AcceptError> {
        let last = self.run(input)?;
        Ok(self.accepting().contains(&last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Nfa;
    use crate::grammar::Grammar;

    fn sample_dfa() -> Dfa {
        let grammar = Grammar::parse("S -> aA | b\nA -> a | e").unwrap();
        Nfa::from_grammar(&grammar).determinize()
    }

    #[test]
    fn accepts_exactly_the_language_of_the_grammar() {
        let dfa = sample_dfa();
        assert_eq!(dfa.accepts("a"), Ok(true));
        assert_eq!(dfa.accepts("aa"), Ok(true));
        assert_eq!(dfa.accepts("b"), Ok(true));
        assert_eq!(dfa.accepts("ab"), Ok(false));
        assert_eq!(dfa.accepts(""), Ok(false));
        assert_eq!(dfa.accepts("aab"), Ok(false));
    }

    #[test]
    fn foreign_symbol_is_reported_with_its_trigger() {
        let dfa = sample_dfa();
        assert_eq!(
            dfa.accepts("axb"),
            Err(AcceptError::SymbolNotInAlphabet { symbol: 'x' })
        );
    }

    #[test]
    fn undefined_transition_names_the_stuck_state() {
        // Hand-built partial DFA: alphabet has b, but q0 only moves on a.
        let mut dfa = Dfa::new(StateId::named("q0"));
        dfa.set_transition("q0".into(), 'a', "q0".into());
        dfa.insert_symbol('b');
        assert_eq!(
            dfa.accepts("ab"),
            Err(AcceptError::UndefinedTransition {
                state: "q0".into(),
                symbol: 'b',
            })
        );
    }

    #[test]
    fn run_reports_the_final_state() {
        let dfa = sample_dfa();
        assert_eq!(dfa.run("ab"), Ok(StateId::Dead));
        assert_eq!(dfa.run("b").unwrap().name(), "q2");
    }
}
