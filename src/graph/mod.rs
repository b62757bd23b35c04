//! Graph module: nodes, edges and their incidence matrix.
//!
//! This module provides the [`Graph`] struct, which keeps a node list, an
//! edge list and an [`IncidenceMatrix`] consistent under mutation.
//!
//! # Example
//!
//! ```rust
//! use incidence_graph::graph::{Graph, Outcome};
//!
//! let mut graph = Graph::new(["a", "b"], [("a", "b")], false).unwrap();
//! assert_eq!(graph.add_node("c"), Outcome::Applied);
//! graph.connect("b", "c").unwrap();
//!
//! assert_eq!(graph.matrix().row_count(), graph.edge_count());
//! assert_eq!(graph.matrix().column_count(), graph.node_count());
//! ```

mod error;
mod incidence;
mod incidence_graph;
mod model;

pub use error::{GraphError, GraphResult, Outcome, Skip};
pub use incidence::{encode_row, IncidenceMatrix};
pub(crate) use incidence::format_row;
pub use incidence_graph::Graph;
pub use model::{Edge, Node};
