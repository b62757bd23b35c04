//! Topological sort written against the public [`Graph`] API.
//!
//! The visit state lives in the node marks: the sort clears them, marks each
//! node once all of its successors are placed, and clears them again before
//! returning.

use crate::graph::{Graph, GraphError, GraphResult};

/// A node whose successors are still being visited.
struct Pending {
    id: String,
    successors: Vec<String>,
    cursor: usize,
}

impl Pending {
    fn new(graph: &Graph, id: &str) -> GraphResult<Self> {
        let successors = graph
            .adjacent_nodes(id, false)?
            .into_iter()
            .map(|node| node.id().to_string())
            .collect();
        Ok(Self {
            id: id.to_string(),
            successors,
            cursor: 0,
        })
    }
}

/// Returns the ids of a directed acyclic graph in topological order.
///
/// Every edge points from an earlier element to a later one. Sources (nodes
/// with a reception degree of zero) are visited in insertion order, and
/// each visit appends a node after all of its successors; the result is that
/// sequence reversed.
///
/// # Errors
///
/// * [`GraphError::Unoriented`] if the graph is not oriented
/// * [`GraphError::Cyclic`] if the graph contains a directed cycle
///
/// # Example
///
/// ```rust
/// use incidence_graph::algo::topological_sort;
/// use incidence_graph::graph::Graph;
///
/// let mut graph = Graph::new(
///     ["A", "B", "C", "D"],
///     [("A", "B"), ("B", "C"), ("A", "D")],
///     true,
/// )
/// .unwrap();
///
/// assert_eq!(topological_sort(&mut graph).unwrap(), vec!["A", "D", "B", "C"]);
/// ```
pub fn topological_sort(graph: &mut Graph) -> GraphResult<Vec<String>> {
    if !graph.is_oriented() {
        return Err(GraphError::Unoriented);
    }
    if graph.has_directed_cycle() {
        return Err(GraphError::Cyclic);
    }

    let mut sources = Vec::new();
    for node in graph.nodes() {
        if graph.degree(node.id(), true)? == 0 {
            sources.push(node.id().to_string());
        }
    }
    tracing::debug!(sources = sources.len(), "starting topological sort");

    graph.clear_marks();
    let mut order = Vec::with_capacity(graph.order());
    for source in &sources {
        visit(graph, source, &mut order)?;
    }
    graph.clear_marks();

    order.reverse();
    Ok(order)
}

/// Appends `id` and everything reachable from it in depth-first post-order,
/// skipping marked nodes.
fn visit(graph: &mut Graph, id: &str, order: &mut Vec<String>) -> GraphResult<()> {
    if graph.is_marked(id)? {
        return Ok(());
    }

    let mut stack = vec![Pending::new(graph, id)?];
    while let Some(top) = stack.last_mut() {
        match top.successors.get(top.cursor).cloned() {
            Some(next) => {
                top.cursor += 1;
                if !graph.is_marked(&next)? {
                    stack.push(Pending::new(graph, &next)?);
                }
            }
            None => {
                graph.mark(&top.id)?;
                order.push(top.id.clone());
                stack.pop();
            }
        }
    }
    Ok(())
}
