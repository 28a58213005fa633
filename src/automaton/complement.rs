//! Totalization and complement construction.

use super::{Automaton, Dfa, StateId};
use std::collections::BTreeSet;

impl Dfa {
    /// Make the transition table total.
    ///
    /// Every missing `(state, symbol)` pair is pointed at [`StateId::Dead`];
    /// if any transition (pre-existing or just added) targets the dead state,
    /// it is materialized with a self-loop on every symbol. A DFA that is
    /// already total is left untouched.
    pub fn totalize(&mut self) {
        let states: Vec<StateId> = self.states().iter().cloned().collect();
        let symbols: Vec<char> = self.alphabet().iter().copied().collect();

        for state in &states {
            for &symbol in &symbols {
                if self.target(state, symbol).is_none() {
                    self.set_transition(state.clone(), symbol, StateId::Dead);
                }
            }
        }

        let dead_reached = self
            .edges()
            .iter()
            .any(|(_, _, destination)| destination.is_dead());
        if dead_reached {
            self.insert_state(StateId::Dead);
            for &symbol in &symbols {
                self.set_transition(StateId::Dead, symbol, StateId::Dead);
            }
        }
    }

    /// Build the DFA accepting the complement language over the same
    /// alphabet.
    ///
    /// The input is totalized first, then the accepting set becomes
    /// `states - accepting`. The dead state ends up accepting, correctly: it
    /// denotes "stuck on an unrecognized continuation", and every such string
    /// belongs to the complement.
    pub fn complement(&self) -> Dfa {
        let mut complemented = self.clone();
        complemented.totalize();

        let flipped: BTreeSet<StateId> = complemented
            .states()
            .difference(complemented.accepting())
            .cloned()
            .collect();
        complemented.set_accepting(flipped);
        complemented
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
    fn complement_flips_every_verdict() {
        let dfa = sample_dfa();
        let complemented = dfa.complement();
        for input in ["", "a", "aa", "b", "ab", "ba", "aaa", "bb"] {
            assert_ne!(
                dfa.accepts(input).unwrap(),
                complemented.accepts(input).unwrap(),
                "complement agrees on {input:?}"
            );
        }
    }

    #[test]
    fn dead_state_becomes_accepting() {
        let complemented = sample_dfa().complement();
        assert!(complemented.accepting().contains(&StateId::Dead));
    }

    #[test]
    fn totalize_fills_gaps_on_a_partial_dfa() {
        let mut dfa = Dfa::new(StateId::named("q0"));
        dfa.set_transition("q0".into(), 'a', "q1".into());
        dfa.insert_symbol('b');
        dfa.totalize();

        assert_eq!(dfa.target(&"q0".into(), 'b'), Some(&StateId::Dead));
        assert_eq!(dfa.target(&"q1".into(), 'a'), Some(&StateId::Dead));
        assert_eq!(dfa.target(&StateId::Dead, 'b'), Some(&StateId::Dead));
    }

    #[test]
    fn totalize_leaves_a_total_dfa_unchanged() {
        let mut dfa = sample_dfa();
        let before = dfa.clone();
        dfa.totalize();
        assert_eq!(dfa, before);
    }

    #[test]
    fn double_complement_restores_the_language() {
        let dfa = sample_dfa();
        let round_trip = dfa.complement().complement();
        for input in ["", "a", "aa", "b", "ab", "ba", "bab", "aab"] {
            assert_eq!(
                dfa.accepts(input).unwrap(),
                round_trip.accepts(input).unwrap(),
                "double complement changed the verdict on {input:?}"
            );
        }
    }

    #[test]
    fn complement_of_the_empty_language_accepts_everything() {
        // Empty grammar: the DFA has one non-accepting state and no alphabet,
        // so its complement accepts exactly the empty string.
        let dfa = Nfa::from_grammar(&Grammar::default()).determinize();
        let complemented = dfa.complement();
        assert_eq!(dfa.accepts(""), Ok(false));
        assert_eq!(complemented.accepts(""), Ok(true));
    }
}
