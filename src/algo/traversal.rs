//! Depth-first traversals and the classifications built on them.
//!
//! Every walk here runs on an explicit stack of frames, one frame per node
//! on the current path, so visit order matches a recursive depth-first walk
//! without growing the call stack.

use crate::graph::{Graph, GraphResult};

/// One node on the current depth-first path.
struct Frame {
    node: usize,
    /// The node this frame was entered from, until its edge has been skipped.
    parent: Option<usize>,
    adjacent: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &Graph, node: usize, parent: Option<usize>) -> Self {
        Self {
            node,
            parent,
            adjacent: graph.adjacent_positions(node, false),
            cursor: 0,
        }
    }

    /// Advances to the next adjacent position.
    fn advance(&mut self) -> Option<usize> {
        let next = self.adjacent.get(self.cursor).copied();
        self.cursor += 1;
        next
    }
}

impl Graph {
    /// Returns the ids of every node reachable from `id`, the start included.
    ///
    /// Ids are listed in depth-first finish order, following successors for
    /// oriented graphs: a node appears once everything reachable through it
    /// has been listed, so the start always comes last.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`](crate::graph::GraphError::NodeNotFound)
    /// if the id is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use incidence_graph::graph::Graph;
    ///
    /// let graph = Graph::new(["a", "b", "c", "d"], [("a", "b"), ("b", "c"), ("a", "d")], true).unwrap();
    /// assert_eq!(graph.transitive_closure("a").unwrap(), vec!["c", "b", "d", "a"]);
    /// assert_eq!(graph.transitive_closure("b").unwrap(), vec!["c", "b"]);
    /// ```
    pub fn transitive_closure(&self, id: &str) -> GraphResult<Vec<String>> {
        let start = self.position(id)?;
        Ok(self
            .closure_positions(start)
            .into_iter()
            .map(|pos| self.node_at(pos).id().to_string())
            .collect())
    }

    fn closure_positions(&self, start: usize) -> Vec<usize> {
        let mut visited = vec![false; self.order()];
        let mut order = Vec::new();
        visited[start] = true;

        let mut stack = vec![Frame::new(self, start, None)];
        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            match frame.advance() {
                Some(next) if !visited[next] => {
                    visited[next] = true;
                    stack.push(Frame::new(self, next, Some(node)));
                }
                Some(_) => {}
                None => {
                    order.push(node);
                    stack.pop();
                }
            }
        }
        order
    }

    /// Returns true if every node is reachable from a randomly chosen node.
    ///
    /// For oriented graphs this checks reachability from that one node only,
    /// so the answer may depend on the node drawn. See
    /// [`is_connected_from`](Self::is_connected_from) for a fixed start and
    /// [`is_strongly_connected`](Self::is_strongly_connected) for mutual
    /// reachability.
    pub fn is_connected(&self) -> bool {
        let start = self.random_position();
        self.closure_positions(start).len() == self.order()
    }

    /// Returns true if every node is reachable from `id`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`](crate::graph::GraphError::NodeNotFound)
    /// if the id is absent.
    pub fn is_connected_from(&self, id: &str) -> GraphResult<bool> {
        let start = self.position(id)?;
        Ok(self.closure_positions(start).len() == self.order())
    }

    /// Looks for a cycle reachable from `start`, walking away from `previous`.
    ///
    /// Only nodes on the current path count as visited; a node leaves the
    /// path when its branch is exhausted. Each frame ignores a single
    /// occurrence of the node it was entered from, the edge just walked, so
    /// a parallel edge back to it is still a cycle. Passing `start` as
    /// `previous` ignores nothing at the root, and a self-loop anywhere is a
    /// cycle.
    pub(crate) fn has_cycle_from(&self, start: usize, previous: usize) -> bool {
        let mut on_path = vec![false; self.order()];
        on_path[start] = true;

        let root_parent = (previous != start).then_some(previous);
        let mut stack = vec![Frame::new(self, start, root_parent)];
        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            match frame.advance() {
                Some(next) if frame.parent == Some(next) => {
                    frame.parent = None;
                }
                Some(next) => {
                    if on_path[next] {
                        return true;
                    }
                    on_path[next] = true;
                    stack.push(Frame::new(self, next, Some(node)));
                }
                None => {
                    on_path[node] = false;
                    stack.pop();
                }
            }
        }
        false
    }

    /// Returns true if the graph is connected and has no cycle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use incidence_graph::graph::Graph;
    ///
    /// let mut graph = Graph::new(["a", "b", "c"], [("a", "b"), ("a", "c")], false).unwrap();
    /// assert!(graph.is_tree());
    ///
    /// graph.connect("b", "c").unwrap();
    /// assert!(!graph.is_tree());
    /// ```
    pub fn is_tree(&self) -> bool {
        let start = self.random_position();
        self.is_connected() && !self.has_cycle_from(start, start)
    }

    /// Marks every node reachable from `id`.
    ///
    /// Already marked nodes are not explored again; marks stay set until
    /// [`clear_marks`](Self::clear_marks) is called.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`](crate::graph::GraphError::NodeNotFound)
    /// if the id is absent.
    pub fn dfs(&mut self, id: &str) -> GraphResult<()> {
        let start = self.position(id)?;
        self.mark_at(start);

        let mut stack = vec![Frame::new(self, start, None)];
        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            match frame.advance() {
                Some(next) if !self.node_at(next).is_marked() => {
                    self.mark_at(next);
                    stack.push(Frame::new(self, next, Some(node)));
                }
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }

        tracing::debug!(start = id, marked = self.marked_nodes().len(), "dfs finished");
        Ok(())
    }
}
