//! First-encounter state naming.

use crate::automaton::StateId;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Mints stable `q0, q1, …` identifiers for keys in strict first-encounter
/// order. Once assigned, an identifier is never reused or renumbered within
/// the same namer.
///
/// The namer is an explicit, owned object: every construction pass creates
/// its own instance, so two grammars processed in one process never
/// cross-contaminate identifiers.
///
/// Used with `K = String` for grammar non-terminals and with
/// `K = BTreeSet<StateId>` as the order-independent canonical key of an NFA
/// state-set during subset construction.
#[derive(Debug, Clone)]
pub struct StateNamer<K> {
    names: FxHashMap<K, StateId>,
    next: usize,
}

impl<K: Eq + Hash> StateNamer<K> {
    /// Create an empty namer; the first key named will become `q0`.
    pub fn new() -> Self {
        StateNamer {
            names: FxHashMap::default(),
            next: 0,
        }
    }

    /// The identifier for `key`, minting the next free `q{n}` on first
    /// encounter.
    pub fn name(&mut self, key: K) -> StateId {
        if let Some(id) = self.names.get(&key) {
            return id.clone();
        }
        let id = StateId::named(format!("q{}", self.next));
        self.next += 1;
        self.names.insert(key, id.clone());
        id
    }

    /// The identifier already assigned to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&StateId> {
        self.names.get(key)
    }

    /// Whether `key` has been named.
    pub fn contains(&self, key: &K) -> bool {
        self.names.contains_key(key)
    }

    /// How many identifiers have been minted.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no identifier has been minted yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Eq + Hash> Default for StateNamer<K> {
    fn default() -> Self {
        Self::new()
    }
}
