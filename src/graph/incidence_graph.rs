//! Graph implementation backed by an incidence matrix.
//!
//! The graph owns its nodes, its edges and an [`IncidenceMatrix`] kept in
//! lock-step with both lists: row `i` always encodes `edges[i]` and column
//! `j` always corresponds to `nodes[j]`.

use petgraph::algo::{is_cyclic_directed, kosaraju_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::error::{GraphError, GraphResult, Outcome, Skip};
use super::incidence::{format_row, IncidenceMatrix};
use super::model::{Edge, Node};

/// An oriented or unoriented graph with an incidence-matrix representation.
///
/// # Example
///
/// ```rust
/// use incidence_graph::graph::Graph;
///
/// let mut graph = Graph::new(["a", "b", "c"], [("a", "b")], true).unwrap();
/// graph.connect("b", "c").unwrap();
///
/// assert_eq!(graph.order(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.matrix().row(1), Some(&[0, -1, 1][..]));
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    oriented: bool,
    matrix: IncidenceMatrix,
    /// Maps node ids to their position in `nodes`
    positions: HashMap<String, usize>,
}

impl Graph {
    /// Creates a graph from node ids and edges given as id pairs.
    ///
    /// # Arguments
    ///
    /// * `node_ids` - Unique node identifiers, at least one
    /// * `edges` - Endpoint pairs; each id must appear in `node_ids`
    /// * `oriented` - Whether edges go from the first to the second endpoint
    ///
    /// # Errors
    ///
    /// * [`GraphError::Empty`] if `node_ids` is empty
    /// * [`GraphError::DuplicateNode`] if an id appears twice
    /// * [`GraphError::UnknownEdgeEndpoint`] if an edge references an unknown id
    ///
    /// # Example
    ///
    /// ```rust
    /// use incidence_graph::graph::{Graph, GraphError};
    ///
    /// let graph = Graph::new(["x", "y"], [("x", "y")], false).unwrap();
    /// assert_eq!(graph.matrix().row(0), Some(&[1, 1][..]));
    ///
    /// let err = Graph::new(["x"], [("x", "z")], false).unwrap_err();
    /// assert!(matches!(err, GraphError::UnknownEdgeEndpoint { .. }));
    /// ```
    pub fn new<N, E, S>(node_ids: N, edges: E, oriented: bool) -> GraphResult<Self>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        E: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut nodes = Vec::new();
        let mut positions = HashMap::new();
        for id in node_ids {
            let id: String = id.into();
            if positions.contains_key(&id) {
                return Err(GraphError::DuplicateNode(id));
            }
            positions.insert(id.clone(), nodes.len());
            nodes.push(Node::new(id));
        }
        if nodes.is_empty() {
            return Err(GraphError::Empty);
        }

        let mut edge_list = Vec::new();
        for (from, to) in edges {
            let (from, to) = (from.as_ref(), to.as_ref());
            for endpoint in [from, to] {
                if !positions.contains_key(endpoint) {
                    return Err(GraphError::UnknownEdgeEndpoint {
                        from: from.to_string(),
                        to: to.to_string(),
                        missing: endpoint.to_string(),
                    });
                }
            }
            edge_list.push(Edge::new(from, to));
        }

        let mut graph = Self {
            nodes,
            edges: edge_list,
            oriented,
            matrix: IncidenceMatrix::default(),
            positions,
        };
        graph.rebuild_matrix();
        Ok(graph)
    }

    /// Returns true if the graph is oriented (directed).
    pub fn is_oriented(&self) -> bool {
        self.oriented
    }

    /// Returns the nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the incidence matrix.
    pub fn matrix(&self) -> &IncidenceMatrix {
        &self.matrix
    }

    /// Returns the order of the graph (its number of nodes).
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks if a node exists in the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Gets a node by id.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.positions.get(id).map(|&pos| &self.nodes[pos])
    }

    /// Gets the first edge whose endpoints are exactly `(id1, id2)`.
    pub fn get_edge(&self, id1: &str, id2: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.joins(id1, id2))
    }

    pub(crate) fn position(&self, id: &str) -> GraphResult<usize> {
        self.positions
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))
    }

    pub(crate) fn node_at(&self, position: usize) -> &Node {
        &self.nodes[position]
    }

    /// Column positions of both endpoints of an edge.
    fn endpoints(&self, edge: &Edge) -> (usize, usize) {
        (self.positions[edge.node1()], self.positions[edge.node2()])
    }

    fn rebuild_positions(&mut self) {
        self.positions = self
            .nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.id().to_string(), pos))
            .collect();
    }

    fn rebuild_matrix(&mut self) {
        let pairs: Vec<(usize, usize)> = self.edges.iter().map(|e| self.endpoints(e)).collect();
        self.matrix = IncidenceMatrix::from_positions(self.nodes.len(), pairs, self.oriented);
        tracing::trace!(
            rows = self.matrix.row_count(),
            columns = self.matrix.column_count(),
            "rebuilt incidence matrix"
        );
    }

    fn skipped(skip: Skip) -> Outcome {
        tracing::debug!("graph left unchanged: {skip}");
        Outcome::Skipped(skip)
    }

    /// Adds a node with the given id.
    ///
    /// A zero column is appended to every row of the incidence matrix.
    /// Returns [`Skip::NodeExists`] without modifying the graph if the id is
    /// already present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use incidence_graph::graph::{Graph, Outcome, Skip};
    ///
    /// let mut graph = Graph::new(["a"], [("a", "a")], false).unwrap();
    /// assert_eq!(graph.add_node("b"), Outcome::Applied);
    /// assert_eq!(graph.matrix().row(0), Some(&[2, 0][..]));
    ///
    /// assert_eq!(graph.add_node("b"), Outcome::Skipped(Skip::NodeExists("b".into())));
    /// ```
    pub fn add_node(&mut self, id: impl Into<String>) -> Outcome {
        let id = id.into();
        if self.positions.contains_key(&id) {
            return Self::skipped(Skip::NodeExists(id));
        }

        self.positions.insert(id.clone(), self.nodes.len());
        self.nodes.push(Node::new(id));
        self.matrix.push_column();
        Outcome::Applied
    }

    /// Removes a node and every edge touching it.
    ///
    /// The incidence matrix is rebuilt from scratch since every column after
    /// the removed one shifts. Returns [`Skip::NodeNotFound`] if the id is
    /// absent and [`Skip::LastNode`] if it is the only node left.
    pub fn remove_node(&mut self, id: &str) -> Outcome {
        let Some(&pos) = self.positions.get(id) else {
            return Self::skipped(Skip::NodeNotFound(id.to_string()));
        };
        if self.nodes.len() == 1 {
            return Self::skipped(Skip::LastNode(id.to_string()));
        }

        self.nodes.remove(pos);
        self.edges.retain(|edge| !edge.touches(id));
        self.rebuild_positions();
        self.rebuild_matrix();
        Outcome::Applied
    }

    /// Connects two nodes with a new edge.
    ///
    /// If the graph is oriented, `id1` is the origin and `id2` the
    /// destination. Parallel edges are allowed.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either id is absent.
    pub fn connect(&mut self, id1: &str, id2: &str) -> GraphResult<()> {
        let source = self.position(id1)?;
        let target = self.position(id2)?;

        self.edges.push(Edge::new(id1, id2));
        self.matrix.push_row(source, target, self.oriented);
        Ok(())
    }

    /// Removes the first edge whose endpoints are exactly `(id1, id2)`.
    ///
    /// Endpoint order matters even for unoriented graphs. The matrix row at
    /// the same position as the edge is removed with it.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either id is absent. A missing edge
    /// between existing nodes yields [`Skip::EdgeNotFound`] instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use incidence_graph::graph::{Graph, Outcome, Skip};
    ///
    /// let mut graph = Graph::new(["a", "b"], [("a", "b")], false).unwrap();
    /// assert_eq!(
    ///     graph.disconnect("b", "a").unwrap(),
    ///     Outcome::Skipped(Skip::EdgeNotFound("b".into(), "a".into()))
    /// );
    /// assert_eq!(graph.disconnect("a", "b").unwrap(), Outcome::Applied);
    /// assert_eq!(graph.matrix().row_count(), 0);
    /// ```
    pub fn disconnect(&mut self, id1: &str, id2: &str) -> GraphResult<Outcome> {
        self.position(id1)?;
        self.position(id2)?;

        let Some(index) = self.edges.iter().position(|edge| edge.joins(id1, id2)) else {
            return Ok(Self::skipped(Skip::EdgeNotFound(
                id1.to_string(),
                id2.to_string(),
            )));
        };

        self.edges.remove(index);
        self.matrix.remove_row(index);
        Ok(Outcome::Applied)
    }

    /// Returns a uniformly chosen node.
    pub fn random_node(&self) -> &Node {
        &self.nodes[self.random_position()]
    }

    pub(crate) fn random_position(&self) -> usize {
        rand::thread_rng().gen_range(0..self.nodes.len())
    }

    /// Returns a node chosen uniformly with the given random source.
    pub fn random_node_with<R: Rng>(&self, rng: &mut R) -> &Node {
        &self.nodes[rng.gen_range(0..self.nodes.len())]
    }

    pub(crate) fn adjacent_positions(&self, position: usize, predecessors: bool) -> Vec<usize> {
        let mut adjacent = Vec::new();
        for edge in &self.edges {
            let (source, target) = self.endpoints(edge);
            if self.oriented {
                if predecessors && target == position {
                    adjacent.push(source);
                } else if !predecessors && source == position {
                    adjacent.push(target);
                }
            } else if source == position {
                adjacent.push(target);
            } else if target == position {
                adjacent.push(source);
            }
        }
        adjacent
    }

    /// Returns the nodes adjacent to the given node.
    ///
    /// For oriented graphs this is the successors of the node, or its
    /// predecessors when `predecessors` is true. For unoriented graphs it is
    /// the other endpoint of every touching edge, and `predecessors` is
    /// ignored. A self-loop contributes the node itself once. Nodes are
    /// listed in edge order and repeat for parallel edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the id is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use incidence_graph::graph::Graph;
    ///
    /// let graph = Graph::new(["M1", "M2", "P1"], [("M1", "M2")], true).unwrap();
    /// let succ: Vec<&str> = graph.adjacent_nodes("M1", false).unwrap().iter().map(|n| n.id()).collect();
    /// assert_eq!(succ, vec!["M2"]);
    /// let pred: Vec<&str> = graph.adjacent_nodes("M2", true).unwrap().iter().map(|n| n.id()).collect();
    /// assert_eq!(pred, vec!["M1"]);
    /// ```
    pub fn adjacent_nodes(&self, id: &str, predecessors: bool) -> GraphResult<Vec<&Node>> {
        let position = self.position(id)?;
        Ok(self
            .adjacent_positions(position, predecessors)
            .into_iter()
            .map(|pos| &self.nodes[pos])
            .collect())
    }

    /// Returns the degree of a node.
    ///
    /// For oriented graphs this is the emission degree, or the reception
    /// degree when `reception` is true.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the id is absent.
    pub fn degree(&self, id: &str, reception: bool) -> GraphResult<usize> {
        let position = self.position(id)?;
        Ok(self.adjacent_positions(position, reception).len())
    }

    /// Returns true if every node has the same degree.
    ///
    /// The reference degree is taken from a random node.
    pub fn is_regular(&self) -> bool {
        let seed = self.random_position();
        let degree = self.adjacent_positions(seed, false).len();
        (0..self.nodes.len()).all(|pos| self.adjacent_positions(pos, false).len() == degree)
    }

    /// Returns true if every node is adjacent to every other node.
    ///
    /// Parallel edges are counted once and self-loops not at all.
    pub fn is_complete(&self) -> bool {
        let expected = self.nodes.len() - 1;
        (0..self.nodes.len()).all(|pos| {
            let distinct: HashSet<usize> = self
                .adjacent_positions(pos, false)
                .into_iter()
                .filter(|&other| other != pos)
                .collect();
            distinct.len() == expected
        })
    }

    /// Marks a node.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the id is absent.
    pub fn mark(&mut self, id: &str) -> GraphResult<()> {
        let position = self.position(id)?;
        self.nodes[position].set_mark(true);
        Ok(())
    }

    /// Returns true if the node is marked.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the id is absent.
    pub fn is_marked(&self, id: &str) -> GraphResult<bool> {
        let position = self.position(id)?;
        Ok(self.nodes[position].is_marked())
    }

    pub(crate) fn mark_at(&mut self, position: usize) {
        self.nodes[position].set_mark(true);
    }

    /// Resets the mark of every node and edge.
    pub fn clear_marks(&mut self) {
        for node in &mut self.nodes {
            node.set_mark(false);
        }
        for edge in &mut self.edges {
            edge.set_mark(false);
        }
    }

    /// Returns the marked nodes in insertion order.
    pub fn marked_nodes(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|node| node.is_marked()).collect()
    }

    /// Converts the graph into a petgraph `DiGraph`.
    ///
    /// Node weights are the node ids and node indices follow insertion
    /// order. Each unoriented non-loop edge becomes a pair of opposite
    /// directed edges.
    pub fn to_petgraph(&self) -> DiGraph<String, ()> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        for node in &self.nodes {
            graph.add_node(node.id().to_string());
        }
        for edge in &self.edges {
            let (source, target) = self.endpoints(edge);
            let (source, target) = (NodeIndex::new(source), NodeIndex::new(target));
            graph.add_edge(source, target, ());
            if !self.oriented && source != target {
                graph.add_edge(target, source, ());
            }
        }
        graph
    }

    /// Returns true if every node can reach every other node.
    ///
    /// For unoriented graphs this is plain connectivity.
    pub fn is_strongly_connected(&self) -> bool {
        kosaraju_scc(&self.to_petgraph()).len() == 1
    }

    /// Returns true if the graph contains a directed cycle, self-loops
    /// included.
    ///
    /// Every unoriented edge counts as a cycle of length two, so this is only
    /// informative for oriented graphs.
    pub fn has_directed_cycle(&self) -> bool {
        is_cyclic_directed(&self.to_petgraph())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Oriented: {}", self.oriented)?;
        writeln!(f, "Nodes:")?;
        for node in &self.nodes {
            writeln!(f, "    {}", node)?;
        }
        writeln!(f, "Edges:")?;
        for edge in &self.edges {
            writeln!(f, "    {}", edge)?;
        }
        writeln!(f, "Incidence Matrix:")?;
        for row in self.matrix.rows() {
            writeln!(f, "    {}", format_row(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ids(nodes: Vec<&Node>) -> Vec<&str> {
        nodes.into_iter().map(Node::id).collect()
    }

    fn assert_matrix_consistent(graph: &Graph) {
        let matrix = graph.matrix();
        assert_eq!(matrix.row_count(), graph.edge_count());
        assert_eq!(matrix.column_count(), graph.node_count());
        for (i, edge) in graph.edges().iter().enumerate() {
            let (s, t) = graph.endpoints(edge);
            let expected =
                crate::graph::encode_row(graph.node_count(), s, t, graph.is_oriented());
            assert_eq!(matrix.row(i), Some(expected.as_slice()));
        }
    }

    #[test]
    fn test_new_builds_matrix() {
        let graph = Graph::new(["a", "b", "c"], [("a", "b"), ("c", "c")], true).unwrap();
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.matrix().row(0), Some(&[-1, 1, 0][..]));
        assert_eq!(graph.matrix().row(1), Some(&[0, 0, 2][..]));
        assert_matrix_consistent(&graph);
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        let empty: [&str; 0] = [];
        let no_edges: [(&str, &str); 0] = [];
        assert_eq!(
            Graph::new(empty, no_edges, false).unwrap_err(),
            GraphError::Empty
        );
        assert_eq!(
            Graph::new(["a", "a"], no_edges, false).unwrap_err(),
            GraphError::DuplicateNode("a".into())
        );
        assert_eq!(
            Graph::new(["a"], [("q", "a")], false).unwrap_err(),
            GraphError::UnknownEdgeEndpoint {
                from: "q".into(),
                to: "a".into(),
                missing: "q".into(),
            }
        );
    }

    #[test]
    fn test_add_node_appends_zero_column() {
        let mut graph = Graph::new(["a", "b"], [("a", "b")], false).unwrap();
        assert_eq!(graph.add_node("c"), Outcome::Applied);
        assert_eq!(graph.matrix().row(0), Some(&[1, 1, 0][..]));
        assert!(graph.contains("c"));
        assert!(!graph.get_node("c").unwrap().is_marked());

        let before = graph.clone();
        assert_eq!(
            graph.add_node("a"),
            Outcome::Skipped(Skip::NodeExists("a".into()))
        );
        assert_eq!(graph.nodes(), before.nodes());
        assert_eq!(graph.matrix(), before.matrix());
    }

    #[test]
    fn test_remove_node_cascades_edges() {
        let mut graph = Graph::new(
            ["a", "b", "c"],
            [("a", "b"), ("b", "c"), ("a", "c"), ("b", "b")],
            true,
        )
        .unwrap();

        assert_eq!(graph.remove_node("b"), Outcome::Applied);
        assert_eq!(graph.order(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0], Edge::new("a", "c"));
        assert_eq!(graph.matrix().row(0), Some(&[-1, 1][..]));
        assert_matrix_consistent(&graph);

        // Positions are reindexed after removal
        graph.connect("c", "a").unwrap();
        assert_eq!(graph.matrix().row(1), Some(&[1, -1][..]));
    }

    #[test]
    fn test_remove_node_skips() {
        let mut graph = Graph::new(["a"], [("a", "a")], false).unwrap();
        assert_eq!(
            graph.remove_node("z"),
            Outcome::Skipped(Skip::NodeNotFound("z".into()))
        );
        assert_eq!(
            graph.remove_node("a"),
            Outcome::Skipped(Skip::LastNode("a".into()))
        );
        assert_eq!(graph.order(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_connect_encodes_row() {
        let mut graph = Graph::new(["a", "b", "c"], Vec::<(&str, &str)>::new(), false).unwrap();
        graph.connect("c", "a").unwrap();
        graph.connect("b", "b").unwrap();
        graph.connect("c", "a").unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.matrix().row(0), Some(&[1, 0, 1][..]));
        assert_eq!(graph.matrix().row(1), Some(&[0, 2, 0][..]));
        assert_matrix_consistent(&graph);

        assert_eq!(
            graph.connect("a", "nope").unwrap_err(),
            GraphError::NodeNotFound("nope".into())
        );
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_disconnect_removes_matching_row() {
        let mut graph = Graph::new(["a", "b", "c"], [("a", "b"), ("b", "c"), ("a", "b")], true)
            .unwrap();

        assert_eq!(graph.disconnect("a", "b").unwrap(), Outcome::Applied);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges()[0], Edge::new("b", "c"));
        assert_eq!(graph.matrix().row(0), Some(&[0, -1, 1][..]));
        assert_matrix_consistent(&graph);

        assert_eq!(
            graph.disconnect("c", "b").unwrap(),
            Outcome::Skipped(Skip::EdgeNotFound("c".into(), "b".into()))
        );
        assert!(matches!(
            graph.disconnect("a", "zzz"),
            Err(GraphError::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_adjacent_nodes_oriented() {
        let graph = Graph::new(["M1", "M2", "P1"], [("M1", "M2")], true).unwrap();

        assert_eq!(ids(graph.adjacent_nodes("M1", false).unwrap()), vec!["M2"]);
        assert_eq!(ids(graph.adjacent_nodes("M2", true).unwrap()), vec!["M1"]);
        assert!(graph.adjacent_nodes("M2", false).unwrap().is_empty());
        assert!(graph.adjacent_nodes("P1", false).unwrap().is_empty());

        assert_eq!(graph.degree("M1", false).unwrap(), 1);
        assert_eq!(graph.degree("M1", true).unwrap(), 0);
        assert_eq!(graph.degree("M2", true).unwrap(), 1);
        assert!(graph.degree("Q", false).is_err());
    }

    #[test]
    fn test_adjacent_nodes_unoriented() {
        let graph = Graph::new(["a", "b", "c"], [("a", "b"), ("c", "a"), ("a", "a")], false)
            .unwrap();

        assert_eq!(ids(graph.adjacent_nodes("a", false).unwrap()), vec!["b", "c", "a"]);
        assert_eq!(ids(graph.adjacent_nodes("a", true).unwrap()), vec!["b", "c", "a"]);
        assert_eq!(ids(graph.adjacent_nodes("c", false).unwrap()), vec!["a"]);
        assert_eq!(graph.degree("a", false).unwrap(), 3);
    }

    #[test]
    fn test_is_regular() {
        let cycle = Graph::new(["a", "b", "c"], [("a", "b"), ("b", "c"), ("c", "a")], false)
            .unwrap();
        assert!(cycle.is_regular());

        let path = Graph::new(["a", "b", "c"], [("a", "b"), ("b", "c")], false).unwrap();
        assert!(!path.is_regular());

        let single = Graph::new(["a"], Vec::<(&str, &str)>::new(), true).unwrap();
        assert!(single.is_regular());
    }

    #[test]
    fn test_is_complete() {
        let mut graph = Graph::new(["a", "b", "c"], [("a", "b"), ("b", "c")], false).unwrap();
        assert!(!graph.is_complete());

        graph.connect("c", "a").unwrap();
        assert!(graph.is_complete());

        // Parallel edges do not count twice
        graph.connect("a", "b").unwrap();
        assert!(graph.is_complete());
    }

    #[test]
    fn test_self_loops_do_not_make_complete() {
        let graph = Graph::new(
            ["a", "b", "c", "d"],
            [
                ("a", "a"),
                ("b", "b"),
                ("c", "c"),
                ("d", "d"),
                ("a", "b"),
                ("a", "c"),
                ("d", "b"),
                ("d", "c"),
            ],
            false,
        )
        .unwrap();
        assert!(!graph.is_complete());

        let looped_pair = Graph::new(["a", "b"], [("a", "b"), ("a", "a")], false).unwrap();
        assert!(looped_pair.is_complete());
    }

    #[test]
    fn test_random_node_with_seed() {
        let graph = Graph::new(["a", "b", "c"], Vec::<(&str, &str)>::new(), false).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(graph.contains(graph.random_node_with(&mut rng).id()));
        }
        assert!(graph.contains(graph.random_node().id()));
    }

    #[test]
    fn test_marks() {
        let mut graph = Graph::new(["a", "b"], [("a", "b")], true).unwrap();
        graph.mark("b").unwrap();
        assert!(graph.is_marked("b").unwrap());
        assert!(!graph.is_marked("a").unwrap());
        assert_eq!(ids(graph.marked_nodes()), vec!["b"]);

        graph.clear_marks();
        assert!(graph.marked_nodes().is_empty());
        assert!(graph.mark("z").is_err());
    }

    #[test]
    fn test_strong_connectivity() {
        let mut graph = Graph::new(["a", "b", "c"], [("a", "b"), ("b", "c")], true).unwrap();
        assert!(!graph.is_strongly_connected());
        assert!(!graph.has_directed_cycle());

        graph.connect("c", "a").unwrap();
        assert!(graph.is_strongly_connected());
        assert!(graph.has_directed_cycle());

        let unoriented = Graph::new(["a", "b"], [("a", "b")], false).unwrap();
        assert!(unoriented.is_strongly_connected());
    }

    #[test]
    fn test_to_petgraph() {
        let graph = Graph::new(["a", "b"], [("a", "b"), ("b", "b")], false).unwrap();
        let pg = graph.to_petgraph();
        assert_eq!(pg.node_count(), 2);
        assert_eq!(pg.edge_count(), 3);
        assert_eq!(pg[NodeIndex::new(1)], "b");
    }

    #[test]
    fn test_display() {
        let graph = Graph::new(["a", "b"], [("a", "b")], true).unwrap();
        let text = graph.to_string();
        assert!(text.starts_with("Oriented: true\n"));
        assert!(text.contains("    (a,b)\n"));
        assert!(text.contains("    [-1,  1]\n"));
    }
}
