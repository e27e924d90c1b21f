use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    /// Nodes taken off the frontier, root and goal included.
    pub nodes_generated: usize,
    pub nodes_expanded: usize,
    /// Children dropped because their state was explored or already open at
    /// an equal or lower cost.
    pub nodes_discarded: usize,
    pub nodes_replaced: usize,
    pub frontier_high_water: usize,
    pub solution_cost: Option<f64>,
    pub time_us: usize,
}

impl Stats {
    pub(crate) fn print(&self) {
        debug!(
            "Cost {:?} Time(microseconds) {:?} Generated nodes {:?} Expanded nodes {:?} Replaced nodes {:?} Frontier high water {:?}",
            self.solution_cost,
            self.time_us,
            self.nodes_generated,
            self.nodes_expanded,
            self.nodes_replaced,
            self.frontier_high_water
        );
    }
}
