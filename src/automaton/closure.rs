//! Epsilon-closure computation.

use super::{Label, Nfa, StateId};
use std::collections::BTreeSet;

impl Nfa {
    /// The smallest superset of `seed` closed under epsilon transitions.
    ///
    /// Plain stack traversal over epsilon edges only. The visited set doubles
    /// as the result, so each state is expanded at most once and epsilon
    /// cycles terminate.
    pub fn epsilon_closure<I>(&self, seed: I) -> BTreeSet<StateId>
    where
        I: IntoIterator<Item = StateId>,
    {
        let mut closed = BTreeSet::new();
        let mut pending: Vec<StateId> = seed.into_iter().collect();

        while let Some(state) = pending.pop() {
            if !closed.insert(state.clone()) {
                continue;
            }
            if let Some(targets) = self.targets(&state, &Label::Epsilon) {
                for target in targets {
                    if !closed.contains(target) {
                        pending.push(target.clone());
                    }
                }
            }
        }

        closed
    }

    /// Epsilon-closure of a single state.
    pub fn epsilon_closure_of(&self, state: &StateId) -> BTreeSet<StateId> {
        self.epsilon_closure(std::iter::once(state.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Nfa {
        // q0 -e-> q1 -e-> q2, plus q2 -a-> q0 which closure must ignore.
        let mut nfa = Nfa::new(StateId::named("q0"));
        nfa.add_transition("q0".into(), Label::Epsilon, "q1".into());
        nfa.add_transition("q1".into(), Label::Epsilon, "q2".into());
        nfa.add_transition("q2".into(), Label::Symbol('a'), "q0".into());
        nfa
    }

    #[test]
    fn closure_follows_epsilon_chains_only() {
        let nfa = chain();
        let closed = nfa.epsilon_closure_of(&"q0".into());
        assert_eq!(closed.len(), 3);

        let from_middle = nfa.epsilon_closure_of(&"q1".into());
        assert_eq!(from_middle.len(), 2);
        assert!(!from_middle.contains(&"q0".into()));
    }

    #[test]
    fn closure_terminates_on_epsilon_cycles() {
        let mut nfa = Nfa::new(StateId::named("q0"));
        nfa.add_transition("q0".into(), Label::Epsilon, "q1".into());
        nfa.add_transition("q1".into(), Label::Epsilon, "q0".into());
        let closed = nfa.epsilon_closure_of(&"q0".into());
        assert_eq!(closed.len(), 2);
    }

    #[test]
    fn closure_is_idempotent() {
        let nfa = chain();
        let once = nfa.epsilon_closure_of(&"q0".into());
        let twice = nfa.epsilon_closure(once.iter().cloned());
        assert_eq!(once, twice);
    }

    #[test]
    fn closure_of_empty_seed_is_empty() {
        let nfa = chain();
        assert!(nfa.epsilon_closure(std::iter::empty()).is_empty());
    }
}
