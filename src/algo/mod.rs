//! Traversal and ordering algorithms over [`Graph`](crate::graph::Graph).
//!
//! # Features
//!
//! - Transitive closure and reachability connectivity
//! - Path-scoped cycle detection and tree classification
//! - Marking depth-first search
//! - Topological sort of oriented acyclic graphs
//!
//! The traversal methods are inherent methods of `Graph` defined in
//! [`traversal`]; the topological sort is a free function built only on the
//! public graph API.
//!
//! # Example
//!
//! ```rust
//! use incidence_graph::algo::topological_sort;
//! use incidence_graph::graph::Graph;
//!
//! let mut graph = Graph::new(["a", "b"], [("a", "b")], true).unwrap();
//! assert!(graph.is_connected_from("a").unwrap());
//! assert_eq!(topological_sort(&mut graph).unwrap(), vec!["a", "b"]);
//! ```

pub mod topo;
pub mod traversal;

pub use topo::topological_sort;
