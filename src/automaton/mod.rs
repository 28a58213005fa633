//! Finite automata over single-character alphabets.
//!
//! Two concrete machine types share one data model:
//!
//! - [`Nfa`]: non-deterministic, with epsilon transitions and set-valued
//!   destinations. Produced by the grammar translation and by reversal.
//! - [`Dfa`]: deterministic, one destination per `(state, symbol)` pair and
//!   no epsilon labels, by construction. Produced by the subset construction.
//!
//! All collections are B-tree based so iteration order (and therefore every
//! serialized report and every construction pass) is reproducible.

pub mod accept;
pub mod builder;
mod closure;
mod complement;
mod reverse;
mod subset;

pub use accept::AcceptError;
pub use builder::NfaBuilder;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Identifier of an automaton state.
///
/// The dead (trap) state is a distinct variant rather than a reserved name,
/// so a freshly minted `q{n}` identifier can never collide with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StateId {
    /// A state minted by a [`StateNamer`](crate::grammar::namer::StateNamer)
    /// or reserved by a construction (`qF`, `qR`).
    Named(String),
    /// The explicit trap state introduced by totalization.
    Dead,
}

impl StateId {
    /// Create a named state identifier.
    pub fn named(name: impl Into<String>) -> Self {
        StateId::Named(name.into())
    }

    /// The display name of this state (`Dead` for the trap state).
    pub fn name(&self) -> &str {
        match self {
            StateId::Named(name) => name,
            StateId::Dead => "Dead",
        }
    }

    /// Whether this is the trap state.
    pub fn is_dead(&self) -> bool {
        matches!(self, StateId::Dead)
    }
}

impl Ord for StateId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Order by display name; a named "Dead" sorts just before the trap
        // state so the ordering stays consistent with equality.
        self.name()
            .cmp(other.name())
            .then_with(|| self.is_dead().cmp(&other.is_dead()))
    }
}

impl PartialOrd for StateId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        StateId::named(name)
    }
}

/// Transition label of a non-deterministic automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// Consumes no input.
    Epsilon,
    /// Consumes exactly this symbol.
    Symbol(char),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => f.write_str("e"),
            Label::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// Read access to the five informational blocks of any automaton:
/// Q, Sigma, q0, delta and F.
pub trait Automaton {
    /// The state set, sorted.
    fn states(&self) -> &BTreeSet<StateId>;

    /// The input alphabet, sorted. Never contains the epsilon marker.
    fn alphabet(&self) -> &BTreeSet<char>;

    /// The initial state, always a member of [`states`](Automaton::states).
    fn initial(&self) -> &StateId;

    /// The accepting subset of the state set.
    fn accepting(&self) -> &BTreeSet<StateId>;

    /// Every transition as an `(origin, label, destination)` triple, sorted
    /// by origin, then label, then destination.
    fn edges(&self) -> Vec<(StateId, Label, StateId)>;
}

/// A non-deterministic finite automaton with epsilon transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<char>,
    transitions: BTreeMap<StateId, BTreeMap<Label, BTreeSet<StateId>>>,
    initial: StateId,
    accepting: BTreeSet<StateId>,
}

impl Nfa {
    /// Create an NFA containing only the given initial state.
    pub fn new(initial: StateId) -> Self {
        let mut states = BTreeSet::new();
        states.insert(initial.clone());
        Nfa {
            states,
            alphabet: BTreeSet::new(),
            transitions: BTreeMap::new(),
            initial,
            accepting: BTreeSet::new(),
        }
    }

    /// Insert a state with no transitions.
    pub fn insert_state(&mut self, state: StateId) {
        self.states.insert(state);
    }

    /// Insert a symbol into the alphabet without adding a transition.
    pub fn insert_symbol(&mut self, symbol: char) {
        self.alphabet.insert(symbol);
    }

    /// Record a transition, accumulating the destination into the existing
    /// destination set. Both endpoints are inserted into the state set and a
    /// symbol label is inserted into the alphabet.
    pub fn add_transition(&mut self, from: StateId, label: Label, to: StateId) {
        if let Label::Symbol(symbol) = label {
            self.alphabet.insert(symbol);
        }
        self.states.insert(from.clone());
        self.states.insert(to.clone());
        self.transitions
            .entry(from)
            .or_default()
            .entry(label)
            .or_default()
            .insert(to);
    }

    /// Mark a state accepting, inserting it into the state set if needed.
    pub fn mark_accepting(&mut self, state: StateId) {
        self.states.insert(state.clone());
        self.accepting.insert(state);
    }

    /// The destination set of `(state, label)`, if any transition exists.
    pub fn targets(&self, state: &StateId, label: &Label) -> Option<&BTreeSet<StateId>> {
        self.transitions.get(state)?.get(label)
    }
}

impl Automaton for Nfa {
    fn states(&self) -> &BTreeSet<StateId> {
        &self.states
    }

    fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    fn initial(&self) -> &StateId {
        &self.initial
    }

    fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    fn edges(&self) -> Vec<(StateId, Label, StateId)> {
        let mut edges = Vec::new();
        for (from, row) in &self.transitions {
            for (label, targets) in row {
                for to in targets {
                    edges.push((from.clone(), *label, to.clone()));
                }
            }
        }
        edges
    }
}

/// A deterministic finite automaton.
///
/// Determinism holds by construction: the transition table stores exactly one
/// destination per `(state, symbol)` pair and labels are plain symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<char>,
    transitions: BTreeMap<StateId, BTreeMap<char, StateId>>,
    initial: StateId,
    accepting: BTreeSet<StateId>,
}

impl Dfa {
    /// Create a DFA containing only the given initial state.
    pub fn new(initial: StateId) -> Self {
        let mut states = BTreeSet::new();
        states.insert(initial.clone());
        Dfa {
            states,
            alphabet: BTreeSet::new(),
            transitions: BTreeMap::new(),
            initial,
            accepting: BTreeSet::new(),
        }
    }

    /// Insert a state with no transitions.
    pub fn insert_state(&mut self, state: StateId) {
        self.states.insert(state);
    }

    /// Insert a symbol into the alphabet without adding a transition.
    pub fn insert_symbol(&mut self, symbol: char) {
        self.alphabet.insert(symbol);
    }

    /// Record the transition for `(from, symbol)`, replacing any previous
    /// destination. Both endpoints are inserted into the state set and the
    /// symbol into the alphabet.
    pub fn set_transition(&mut self, from: StateId, symbol: char, to: StateId) {
        self.alphabet.insert(symbol);
        self.states.insert(from.clone());
        self.states.insert(to.clone());
        self.transitions.entry(from).or_default().insert(symbol, to);
    }

    /// Mark a state accepting, inserting it into the state set if needed.
    pub fn mark_accepting(&mut self, state: StateId) {
        self.states.insert(state.clone());
        self.accepting.insert(state);
    }

    /// The destination of `(state, symbol)`, if defined.
    pub fn target(&self, state: &StateId, symbol: char) -> Option<&StateId> {
        self.transitions.get(state)?.get(&symbol)
    }

    pub(crate) fn set_accepting(&mut self, accepting: BTreeSet<StateId>) {
        self.accepting = accepting;
    }
}

impl Automaton for Dfa {
    fn states(&self) -> &BTreeSet<StateId> {
        &self.states
    }

    fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    fn initial(&self) -> &StateId {
        &self.initial
    }

    fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    fn edges(&self) -> Vec<(StateId, Label, StateId)> {
        let mut edges = Vec::new();
        for (from, row) in &self.transitions {
            for (symbol, to) in row {
                edges.push((from.clone(), Label::Symbol(*symbol), to.clone()));
            }
        }
        edges
    }
}
