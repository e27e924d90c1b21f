use std::rc::Rc;

/// A search tree node. Nodes are never mutated or reparented once built; a
/// child only keeps a shared back-reference to its parent.
#[derive(Debug)]
pub struct Node<S, A> {
    parent: Option<Rc<Node<S, A>>>,
    action: Option<A>,
    state: S,
    cost: f64,
    depth: usize,
}

impl<S, A> Node<S, A> {
    pub fn root(state: S) -> Self {
        Node {
            parent: None,
            action: None,
            state,
            cost: 0.,
            depth: 0,
        }
    }

    pub fn child(parent: &Rc<Node<S, A>>, action: A, state: S, step_cost: f64) -> Self {
        Node {
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            state,
            cost: parent.cost + step_cost,
            depth: parent.depth + 1,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Path cost from the root.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<&Rc<Node<S, A>>> {
        self.parent.as_ref()
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    fn ancestors(&self) -> impl Iterator<Item = &Node<S, A>> {
        std::iter::successors(Some(self), |node| node.parent.as_deref())
    }
}

impl<S: Clone, A: Clone> Node<S, A> {
    /// Actions from the root to this node, oldest first.
    pub fn solution(&self) -> Vec<A> {
        let mut actions: Vec<A> = self
            .ancestors()
            .filter_map(|node| node.action.clone())
            .collect();
        actions.reverse();
        actions
    }

    /// States from the root to this node, root first.
    pub fn path(&self) -> Vec<S> {
        let mut states: Vec<S> = self.ancestors().map(|node| node.state.clone()).collect();
        states.reverse();
        states
    }
}
