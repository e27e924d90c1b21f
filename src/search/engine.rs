use super::{Frontier, HeuristicCost, Node, NodeOrdering, PathCost, Problem, Search};
use crate::stat::Stats;

use std::collections::HashSet;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, instrument, trace};

/// Best-first graph search. The node ordering is fixed at construction:
/// `PathCost` gives uniform-cost search, `HeuristicCost` gives A*.
#[derive(Debug, Clone)]
pub struct BestFirstSearch<O> {
    ordering: O,
    stats: Stats,
}

impl BestFirstSearch<PathCost> {
    pub fn uniform_cost() -> Self {
        Self::new(PathCost)
    }
}

impl<H> BestFirstSearch<HeuristicCost<H>> {
    /// The heuristic should be admissible for the result to be optimal.
    pub fn a_star(heuristic: H) -> Self {
        Self::new(HeuristicCost::new(heuristic))
    }

    pub fn heuristic(&self) -> &H {
        self.ordering.heuristic()
    }
}

impl<O> BestFirstSearch<O> {
    pub fn new(ordering: O) -> Self {
        BestFirstSearch {
            ordering,
            stats: Stats::default(),
        }
    }

    pub fn ordering(&self) -> &O {
        &self.ordering
    }

    /// Statistics of the last completed search.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Nodes generated by the last completed search.
    pub fn nodes_generated(&self) -> usize {
        self.stats.nodes_generated
    }
}

impl<P, O> Search<P> for BestFirstSearch<O>
where
    P: Problem,
    O: NodeOrdering<P::State>,
{
    #[instrument(skip_all, name = "best_first_search", level = "debug")]
    fn search(&mut self, problem: &P) -> Option<Vec<P::Action>> {
        let start_time = Instant::now();
        self.stats = Stats::default();

        let mut frontier = Frontier::new(&self.ordering);
        let mut explored: HashSet<P::State> = HashSet::new();

        frontier.push(Rc::new(Node::root(problem.initial_state())));

        let result = loop {
            let Some(node) = frontier.pop_min() else {
                debug!("frontier exhausted, no solution");
                break None;
            };
            self.stats.nodes_generated += 1;

            if problem.is_goal(node.state()) {
                debug!("goal reached with cost {}", node.cost());
                self.stats.solution_cost = Some(node.cost());
                break Some(node.solution());
            }

            trace!("expand node: {:?}", node.state());
            let newly_explored = explored.insert(node.state().clone());
            debug_assert!(newly_explored, "state expanded twice");
            self.stats.nodes_expanded += 1;

            for action in problem.actions(node.state()) {
                let child = Rc::new(problem.child_node(&node, action));
                if explored.contains(child.state()) {
                    self.stats.nodes_discarded += 1;
                } else if !frontier.contains_state(child.state()) {
                    frontier.push(child);
                } else if frontier.replace_if_cheaper(child) {
                    self.stats.nodes_replaced += 1;
                } else {
                    self.stats.nodes_discarded += 1;
                }
            }
        };

        self.stats.frontier_high_water = frontier.high_water();
        self.stats.time_us = start_time.elapsed().as_micros() as usize;
        self.stats.print();
        result
    }

    fn nodes_generated(&self) -> usize {
        self.stats.nodes_generated
    }
}

/// Uniform-cost search.
pub type UniformCostSearch = BestFirstSearch<PathCost>;

/// A* search with heuristic `H`.
pub type AStar<H> = BestFirstSearch<HeuristicCost<H>>;
