mod engine;
mod frontier;
mod node;
mod ordering;

pub use engine::{AStar, BestFirstSearch, UniformCostSearch};
pub use frontier::Frontier;
pub use node::Node;
pub use ordering::{HeuristicCost, NodeOrdering, PathCost};

use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

/// A search problem: initial state, transition model, goal test and step costs.
///
/// All methods are expected to be pure functions of their inputs. The engine
/// does not check that `result` is only called with legal actions.
pub trait Problem {
    /// Two states describing the same configuration must be equal and hash
    /// identically.
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn initial_state(&self) -> Self::State;

    /// Legal actions in `state`. Their order only affects tie-breaking.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of reaching `next_state` from `state` through `action`, never negative.
    fn step_cost(&self, state: &Self::State, action: &Self::Action, next_state: &Self::State)
        -> f64;

    /// Build the node reached by applying `action` to `parent`.
    fn child_node(
        &self,
        parent: &Rc<Node<Self::State, Self::Action>>,
        action: Self::Action,
    ) -> Node<Self::State, Self::Action> {
        let state = self.result(parent.state(), &action);
        let step_cost = self.step_cost(parent.state(), &action, &state);
        Node::child(parent, action, state, step_cost)
    }
}

/// Estimated cost from a state to the nearest goal.
///
/// A* only returns optimal solutions when the estimate never exceeds the true
/// remaining cost. This is the caller's responsibility and is never checked.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> f64;
}

/// Always estimates zero. A* with this heuristic behaves as uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> f64 {
        0.
    }
}

impl<S, H: Heuristic<S> + ?Sized> Heuristic<S> for &H {
    fn estimate(&self, state: &S) -> f64 {
        (**self).estimate(state)
    }
}

pub trait Search<P: Problem> {
    /// Returns the actions leading from the initial state to a goal, or `None`
    /// when every reachable state was expanded without finding one.
    fn search(&mut self, problem: &P) -> Option<Vec<P::Action>>;

    /// Nodes generated by the last completed `search` call.
    fn nodes_generated(&self) -> usize;
}
