use crate::search::Problem;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};

// Helper function to setup tracing
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// Explicit directed graph with labelled, weighted edges.
#[derive(Debug, Clone)]
pub(crate) struct WeightedGraph {
    start: u32,
    goals: HashSet<u32>,
    edges: HashMap<u32, Vec<(char, u32, f64)>>,
}

impl WeightedGraph {
    pub(crate) fn new(start: u32, goals: &[u32], edges: &[(u32, char, u32, f64)]) -> Self {
        let mut adjacency: HashMap<u32, Vec<(char, u32, f64)>> = HashMap::new();
        for &(from, label, to, cost) in edges {
            adjacency.entry(from).or_default().push((label, to, cost));
        }
        WeightedGraph {
            start,
            goals: goals.iter().copied().collect(),
            edges: adjacency,
        }
    }

    /// A cycle 0 -> 1 -> 2 -> 0 next to an unreachable goal 3 -> 4.
    pub(crate) fn disconnected() -> Self {
        Self::new(
            0,
            &[4],
            &[
                (0, 'a', 1, 1.),
                (1, 'b', 2, 1.),
                (2, 'c', 0, 1.),
                (1, 'd', 0, 3.),
                (3, 'e', 4, 1.),
            ],
        )
    }

    /// An `n` x `n` grid with moves in all four directions. Costs vary per
    /// cell and direction so several paths compete. Start top-left, goal
    /// bottom-right.
    pub(crate) fn lattice(n: u32) -> Self {
        let mut edges = Vec::new();
        for row in 0..n {
            for column in 0..n {
                let id = row * n + column;
                let weight = |salt: u32| (1 + (row * 7 + column * 3 + salt) % 4) as f64;
                if column + 1 < n {
                    edges.push((id, 'r', id + 1, weight(0)));
                }
                if row + 1 < n {
                    edges.push((id, 'd', id + n, weight(1)));
                }
                if column > 0 {
                    edges.push((id, 'l', id - 1, weight(2)));
                }
                if row > 0 {
                    edges.push((id, 'u', id - n, weight(3)));
                }
            }
        }
        Self::new(0, &[n * n - 1], &edges)
    }

    fn edge(&self, state: u32, label: char) -> Option<(u32, f64)> {
        self.edges
            .get(&state)?
            .iter()
            .find(|(edge_label, _, _)| *edge_label == label)
            .map(|&(_, to, cost)| (to, cost))
    }

    /// Number of states reachable from the start, start included.
    pub(crate) fn reachable_from_start(&self) -> usize {
        let mut seen = HashSet::from([self.start]);
        let mut queue = VecDeque::from([self.start]);
        while let Some(state) = queue.pop_front() {
            for &(_, to, _) in self.edges.get(&state).into_iter().flatten() {
                if seen.insert(to) {
                    queue.push_back(to);
                }
            }
        }
        seen.len()
    }

    /// Cost of following `actions` from the start, if they end in a goal.
    pub(crate) fn solution_cost(&self, actions: &[char]) -> Option<f64> {
        let mut state = self.start;
        let mut cost = 0.;
        for &label in actions {
            let (next, step) = self.edge(state, label)?;
            state = next;
            cost += step;
        }
        self.goals.contains(&state).then_some(cost)
    }

    /// Minimum goal cost over every simple path from the start.
    pub(crate) fn brute_force_optimal_cost(&self) -> Option<f64> {
        fn visit(
            graph: &WeightedGraph,
            state: u32,
            cost: f64,
            on_path: &mut HashSet<u32>,
            best: &mut Option<f64>,
        ) {
            if graph.goals.contains(&state) && best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            for &(_, to, step) in graph.edges.get(&state).into_iter().flatten() {
                if on_path.insert(to) {
                    visit(graph, to, cost + step, on_path, best);
                    on_path.remove(&to);
                }
            }
        }

        let mut best = None;
        let mut on_path = HashSet::from([self.start]);
        visit(self, self.start, 0., &mut on_path, &mut best);
        best
    }
}

impl Problem for WeightedGraph {
    type State = u32;
    type Action = char;

    fn initial_state(&self) -> u32 {
        self.start
    }

    fn actions(&self, state: &u32) -> Vec<char> {
        self.edges
            .get(state)
            .map(|edges| edges.iter().map(|(label, _, _)| *label).collect())
            .unwrap_or_default()
    }

    fn is_goal(&self, state: &u32) -> bool {
        self.goals.contains(state)
    }

    fn result(&self, state: &u32, action: &char) -> u32 {
        self.edge(*state, *action)
            .map(|(to, _)| to)
            .unwrap_or_else(|| panic!("action {action:?} is not legal in state {state}"))
    }

    fn step_cost(&self, state: &u32, action: &char, _next_state: &u32) -> f64 {
        self.edge(*state, *action)
            .map(|(_, cost)| cost)
            .unwrap_or_else(|| panic!("action {action:?} is not legal in state {state}"))
    }
}

/// Wraps a problem and records how often each state was expanded, i.e. how
/// often its actions were requested.
pub(crate) struct CountingProblem<P: Problem> {
    inner: P,
    expansions: RefCell<HashMap<P::State, usize>>,
}

impl<P: Problem> CountingProblem<P> {
    pub(crate) fn new(inner: P) -> Self {
        CountingProblem {
            inner,
            expansions: RefCell::new(HashMap::new()),
        }
    }

    pub(crate) fn expansions(&self) -> HashMap<P::State, usize> {
        self.expansions.borrow().clone()
    }
}

impl<P: Problem> Problem for CountingProblem<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> P::State {
        self.inner.initial_state()
    }

    fn actions(&self, state: &P::State) -> Vec<P::Action> {
        *self
            .expansions
            .borrow_mut()
            .entry(state.clone())
            .or_insert(0) += 1;
        self.inner.actions(state)
    }

    fn is_goal(&self, state: &P::State) -> bool {
        self.inner.is_goal(state)
    }

    fn result(&self, state: &P::State, action: &P::Action) -> P::State {
        self.inner.result(state, action)
    }

    fn step_cost(&self, state: &P::State, action: &P::Action, next_state: &P::State) -> f64 {
        self.inner.step_cost(state, action, next_state)
    }
}
