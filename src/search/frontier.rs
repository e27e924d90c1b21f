use super::{Node, NodeOrdering};

use ordered_float::OrderedFloat;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::rc::Rc;
use tracing::trace;

/// Position of an open node in the priority order. Equal priorities are
/// served in insertion order, so runs are reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    priority: OrderedFloat<f64>,
    sequence: u64,
}

/// Open set of a best-first search.
///
/// Open nodes are kept in a `BTreeMap` ordered by `(priority, sequence)` and
/// indexed by state, so at most one node per state is open at any time.
pub struct Frontier<'o, S, A, O> {
    ordering: &'o O,
    open: BTreeMap<FrontierKey, Rc<Node<S, A>>>,
    index: HashMap<S, FrontierKey>,
    next_sequence: u64,
    high_water: usize,
}

impl<'o, S, A, O> Frontier<'o, S, A, O>
where
    S: Clone + Eq + Hash,
    O: NodeOrdering<S>,
{
    pub fn new(ordering: &'o O) -> Self {
        Frontier {
            ordering,
            open: BTreeMap::new(),
            index: HashMap::new(),
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// Insert a node whose state is not open yet.
    pub fn push(&mut self, node: Rc<Node<S, A>>) {
        debug_assert!(
            !self.index.contains_key(node.state()),
            "state is already open, use replace_if_cheaper"
        );
        let key = FrontierKey {
            priority: OrderedFloat(self.ordering.priority(&*node)),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.index.insert(node.state().clone(), key);
        self.open.insert(key, node);
        self.high_water = self.high_water.max(self.open.len());
    }

    /// Remove and return a node of minimum priority.
    pub fn pop_min(&mut self) -> Option<Rc<Node<S, A>>> {
        let (_, node) = self.open.pop_first()?;
        self.index.remove(node.state());
        Some(node)
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Path cost of the open node for `state`, if any.
    pub fn peek_cost(&self, state: &S) -> Option<f64> {
        self.index
            .get(state)
            .and_then(|key| self.open.get(key))
            .map(|node| node.cost())
    }

    /// Swap the open node for `node.state()` with `node` when `node` is strictly
    /// cheaper. Returns whether the replacement happened.
    pub fn replace_if_cheaper(&mut self, node: Rc<Node<S, A>>) -> bool {
        let Some(&old_key) = self.index.get(node.state()) else {
            return false;
        };
        let Some(old_cost) = self.open.get(&old_key).map(|old| old.cost()) else {
            return false;
        };
        if old_cost <= node.cost() {
            return false;
        }

        trace!("cheaper path found: {old_cost} -> {}", node.cost());
        // The stale entry must leave both the order and the index.
        self.open.remove(&old_key);
        self.index.remove(node.state());
        self.push(node);
        true
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Largest number of simultaneously open nodes.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    pub fn clear(&mut self) {
        self.open.clear();
        self.index.clear();
        self.next_sequence = 0;
        self.high_water = 0;
    }
}
