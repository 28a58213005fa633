//! Subset construction: epsilon-NFA to DFA.

use super::{Automaton, Dfa, Label, Nfa, StateId};
use crate::grammar::namer::StateNamer;
use std::collections::{BTreeSet, VecDeque};

impl Nfa {
    /// Determinize this automaton with the subset construction.
    ///
    /// Each DFA state is the epsilon-closure of a set of NFA states. The
    /// canonical-name table is keyed by the set itself (`BTreeSet`, so
    /// membership alone decides identity) and mints `q0, q1, …` in
    /// first-encounter order over a FIFO worklist that scans symbols in
    /// sorted order, which makes repeated runs produce identical names and
    /// tables. The empty set never draws from that sequence: it is
    /// [`StateId::Dead`], materialized with self-loops on every symbol iff
    /// some transition produced it. Every `(state, symbol)` pair is recorded,
    /// so the result is total.
    ///
    /// A DFA state is accepting iff its underlying set contains an accepting
    /// NFA state.
    pub fn determinize(&self) -> Dfa {
        let mut namer: StateNamer<BTreeSet<StateId>> = StateNamer::new();

        let start = self.epsilon_closure_of(self.initial());
        let start_name = namer.name(start.clone());

        let mut dfa = Dfa::new(start_name);
        for symbol in self.alphabet() {
            dfa.insert_symbol(*symbol);
        }

        let mut worklist: VecDeque<BTreeSet<StateId>> = VecDeque::new();
        let mut scheduled: BTreeSet<BTreeSet<StateId>> = BTreeSet::new();
        worklist.push_back(start.clone());
        scheduled.insert(start);

        let mut dead_reached = false;

        while let Some(current) = worklist.pop_front() {
            let current_name = namer.name(current.clone());
            dfa.insert_state(current_name.clone());

            if current.iter().any(|state| self.accepting().contains(state)) {
                dfa.mark_accepting(current_name.clone());
            }

            for symbol in self.alphabet() {
                let mut moved = BTreeSet::new();
                for state in &current {
                    if let Some(targets) = self.targets(state, &Label::Symbol(*symbol)) {
                        moved.extend(targets.iter().cloned());
                    }
                }
                let closed = self.epsilon_closure(moved);

                let destination = if closed.is_empty() {
                    dead_reached = true;
                    StateId::Dead
                } else {
                    namer.name(closed.clone())
                };
                dfa.set_transition(current_name.clone(), *symbol, destination);

                if !closed.is_empty() && scheduled.insert(closed.clone()) {
                    worklist.push_back(closed);
                }
            }
        }

        if dead_reached {
            dfa.insert_state(StateId::Dead);
            for symbol in self.alphabet() {
                dfa.set_transition(StateId::Dead, *symbol, StateId::Dead);
            }
        }

        dfa
    }
}
