//! Node and edge entities owned by a [`Graph`](super::Graph).

use std::fmt;

/// A node of the graph.
///
/// Nodes are identified by a caller-supplied string id and carry a mark that
/// traversal algorithms use to record visitation. Two nodes are equal iff
/// their ids are equal; the mark does not take part in equality.
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    mark: bool,
}

impl Node {
    /// Creates an unmarked node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use incidence_graph::graph::Node;
    ///
    /// let node = Node::new("Mathematics 1");
    /// assert_eq!(node.id(), "Mathematics 1");
    /// assert!(!node.is_marked());
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mark: false,
        }
    }

    /// Returns the node identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns true if the node is currently marked.
    pub fn is_marked(&self) -> bool {
        self.mark
    }

    pub(crate) fn set_mark(&mut self, mark: bool) {
        self.mark = mark;
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// An edge between two nodes of the same graph.
///
/// In an oriented graph `node1` is the source and `node2` the destination.
/// In an unoriented graph the pair is symmetric but keeps the order it was
/// created with, and lookups by endpoints remain order-sensitive.
#[derive(Debug, Clone)]
pub struct Edge {
    node1: String,
    node2: String,
    mark: bool,
}

impl Edge {
    pub(crate) fn new(node1: impl Into<String>, node2: impl Into<String>) -> Self {
        Self {
            node1: node1.into(),
            node2: node2.into(),
            mark: false,
        }
    }

    /// Id of the first endpoint (the source when oriented).
    pub fn node1(&self) -> &str {
        &self.node1
    }

    /// Id of the second endpoint (the destination when oriented).
    pub fn node2(&self) -> &str {
        &self.node2
    }

    /// Returns true if both endpoints are the same node.
    pub fn is_loop(&self) -> bool {
        self.node1 == self.node2
    }

    /// Returns true if `id` is one of the endpoints.
    pub fn touches(&self, id: &str) -> bool {
        self.node1 == id || self.node2 == id
    }

    /// Returns true if the endpoints are exactly `(id1, id2)`, in that order.
    pub fn joins(&self, id1: &str, id2: &str) -> bool {
        self.node1 == id1 && self.node2 == id2
    }

    /// Returns true if the edge is currently marked.
    pub fn is_marked(&self) -> bool {
        self.mark
    }

    pub(crate) fn set_mark(&mut self, mark: bool) {
        self.mark = mark;
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.node1 == other.node1 && self.node2 == other.node2
    }
}

impl Eq for Edge {}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.node1, self.node2)
    }
}
