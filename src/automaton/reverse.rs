//! Reversed-language construction.

use super::{Automaton, Dfa, Label, Nfa, StateId};

impl Dfa {
    /// Build an epsilon-NFA accepting the reverse language.
    ///
    /// One fresh initial state `qR` is introduced, with an epsilon transition
    /// to every original accepting state; every transition `(p, a) -> q`
    /// becomes `(q, a) -> p`, accumulating into sets since reversal is
    /// generally non-deterministic; the single accepting state is the
    /// original initial state.
    ///
    /// The result is deliberately left non-deterministic. Callers wanting a
    /// DFA invoke [`Nfa::determinize`] themselves.
    pub fn reverse(&self) -> Nfa {
        let start = self.fresh_reverse_initial();
        let mut nfa = Nfa::new(start.clone());

        for state in self.states() {
            nfa.insert_state(state.clone());
        }
        for symbol in self.alphabet() {
            nfa.insert_symbol(*symbol);
        }

        for (from, label, to) in self.edges() {
            nfa.add_transition(to, label, from);
        }
        for state in self.accepting() {
            nfa.add_transition(start.clone(), Label::Epsilon, state.clone());
        }

        nfa.mark_accepting(self.initial().clone());
        nfa
    }

    /// `qR`, or the first of `qR0, qR1, …` not already taken. A DFA read
    /// back from an external report may legitimately contain `qR`.
    fn fresh_reverse_initial(&self) -> StateId {
        let mut candidate = StateId::named("qR");
        let mut counter = 0usize;
        while self.states().contains(&candidate) {
            candidate = StateId::named(format!("qR{counter}"));
            counter += 1;
        }
        candidate
    }
}
