use super::{Heuristic, Node};

/// Priority assigned to open nodes; lower values are expanded first.
pub trait NodeOrdering<S> {
    fn priority<A>(&self, node: &Node<S, A>) -> f64;
}

/// Uniform-cost ordering: `g(n)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathCost;

impl<S> NodeOrdering<S> for PathCost {
    fn priority<A>(&self, node: &Node<S, A>) -> f64 {
        node.cost()
    }
}

/// A* ordering: `g(n) + h(n)`.
#[derive(Clone, Debug)]
pub struct HeuristicCost<H> {
    heuristic: H,
}

impl<H> HeuristicCost<H> {
    pub fn new(heuristic: H) -> Self {
        HeuristicCost { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<S, H: Heuristic<S>> NodeOrdering<S> for HeuristicCost<H> {
    fn priority<A>(&self, node: &Node<S, A>) -> f64 {
        node.cost() + self.heuristic.estimate(node.state())
    }
}
