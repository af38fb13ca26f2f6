use serde::Serialize;

/// What happened at one instant of a traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepEvent<N> {
    /// Run begins at `current_node`
    Start { current_node: N },
    /// `current_node` is marked visited
    Visit { current_node: N },
    /// BFS: `neighbor` appended to the queue while expanding `current_node`
    Enqueue { current_node: N, neighbor: N },
    /// Iterative DFS: `neighbor` pushed onto the stack
    Push { current_node: N, neighbor: N },
    /// Recursive DFS: a call for `current_node` begins
    Enter { current_node: N },
    /// Recursive DFS: `current_node` is about to descend into `neighbor`
    Recurse { current_node: N, neighbor: N },
    /// Recursive DFS: the call for `current_node` finishes
    Return { current_node: N },
    /// Run finished
    Complete,
}

impl<N> StepEvent<N> {
    /// Lowercase tag of the event.
    pub fn name(&self) -> &'static str {
        match self {
            StepEvent::Start { .. } => "start",
            StepEvent::Visit { .. } => "visit",
            StepEvent::Enqueue { .. } => "enqueue",
            StepEvent::Push { .. } => "push",
            StepEvent::Enter { .. } => "enter",
            StepEvent::Recurse { .. } => "recurse",
            StepEvent::Return { .. } => "return",
            StepEvent::Complete => "complete",
        }
    }

    /// Node being processed; `None` only for `Complete`.
    pub fn current_node(&self) -> Option<&N> {
        match self {
            StepEvent::Start { current_node }
            | StepEvent::Visit { current_node }
            | StepEvent::Enqueue { current_node, .. }
            | StepEvent::Push { current_node, .. }
            | StepEvent::Enter { current_node }
            | StepEvent::Recurse { current_node, .. }
            | StepEvent::Return { current_node } => Some(current_node),
            StepEvent::Complete => None,
        }
    }

    /// Node being discovered, for `Enqueue`, `Push` and `Recurse`.
    pub fn neighbor(&self) -> Option<&N> {
        match self {
            StepEvent::Enqueue { neighbor, .. }
            | StepEvent::Push { neighbor, .. }
            | StepEvent::Recurse { neighbor, .. } => Some(neighbor),
            _ => None,
        }
    }
}

/// Snapshot of the pending-work container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frontier<N> {
    /// BFS queue, front first
    Queue(Vec<N>),
    /// Iterative DFS stack, bottom first
    Stack(Vec<N>),
    /// Recursive DFS call stack, outermost call first
    CallStack(Vec<N>),
}

impl<N> Frontier<N> {
    /// Name of the container kind.
    pub fn name(&self) -> &'static str {
        match self {
            Frontier::Queue(_) => "queue",
            Frontier::Stack(_) => "stack",
            Frontier::CallStack(_) => "call_stack",
        }
    }

    pub fn nodes(&self) -> &[N] {
        match self {
            Frontier::Queue(nodes) | Frontier::Stack(nodes) | Frontier::CallStack(nodes) => nodes,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }
}

/// One self-contained traversal snapshot.
///
/// Every container is an owned copy taken when the step was emitted, so a
/// step stays valid no matter what the algorithm does afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step<N> {
    #[serde(flatten)]
    pub event: StepEvent<N>,
    /// Human-readable description
    pub action: String,
    /// Visited nodes, in visit order
    pub visited: Vec<N>,
    #[serde(flatten)]
    pub frontier: Frontier<N>,
    /// Discovery parents as `(child, parent)`, in discovery order
    pub parent: Vec<(N, N)>,
    /// Recursion depth of the current node (recursive DFS only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl<N: PartialEq> Step<N> {
    pub fn is_visited(&self, node: &N) -> bool {
        self.visited.contains(node)
    }

    /// Discovery parent of `node` as of this step.
    pub fn parent_of(&self, node: &N) -> Option<&N> {
        self.parent
            .iter()
            .find(|(child, _)| child == node)
            .map(|(_, parent)| parent)
    }
}
