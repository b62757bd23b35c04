//! Error and outcome types for graph operations.
//!
//! Two severities exist. Structural errors ([`GraphError`]) are returned when
//! an operation references something that cannot be resolved, such as an
//! unknown node id. Informational no-ops ([`Outcome::Skipped`]) are returned
//! when a mutation had nothing to do; they never indicate a broken graph.

use std::fmt;

/// Errors that can occur while building or querying a [`Graph`](super::Graph).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A graph needs at least one node.
    #[error("A graph requires at least one node")]
    Empty,

    /// The same node id was supplied twice at construction.
    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),

    /// An edge given at construction references a node id that is not in the
    /// node list.
    #[error("Unknown node id in edge ({from},{to}): {missing}")]
    UnknownEdgeEndpoint {
        /// First endpoint of the offending edge
        from: String,
        /// Second endpoint of the offending edge
        to: String,
        /// The endpoint that could not be resolved
        missing: String,
    },

    /// The referenced node does not exist.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// The algorithm only applies to oriented graphs.
    #[error("Operation requires an oriented graph")]
    Unoriented,

    /// The algorithm only applies to acyclic graphs.
    #[error("Graph contains a cycle")]
    Cyclic,
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Reason a mutation left the graph unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// `add_node` was given an id that is already present.
    NodeExists(String),
    /// `remove_node` was given an id that is not present.
    NodeNotFound(String),
    /// `remove_node` would have emptied the graph.
    LastNode(String),
    /// `disconnect` found no edge with these endpoints in this order.
    EdgeNotFound(String, String),
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeExists(id) => write!(f, "node {} already exists", id),
            Self::NodeNotFound(id) => write!(f, "node {} does not exist", id),
            Self::LastNode(id) => write!(f, "node {} is the last node of the graph", id),
            Self::EdgeNotFound(a, b) => write!(f, "edge ({},{}) does not exist", a, b),
        }
    }
}

/// Result of a mutation that may legitimately do nothing.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The graph was modified.
    Applied,
    /// The graph was left as it was.
    Skipped(Skip),
}

impl Outcome {
    /// Returns true if the mutation modified the graph.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Returns the skip reason, if any.
    pub fn skip(&self) -> Option<&Skip> {
        match self {
            Self::Applied => None,
            Self::Skipped(skip) => Some(skip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GraphError::UnknownEdgeEndpoint {
            from: "a".into(),
            to: "z".into(),
            missing: "z".into(),
        };
        assert_eq!(err.to_string(), "Unknown node id in edge (a,z): z");
        assert_eq!(
            GraphError::NodeNotFound("x".into()).to_string(),
            "Node not found: x"
        );
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(Outcome::Applied.is_applied());
        assert!(Outcome::Applied.skip().is_none());

        let skipped = Outcome::Skipped(Skip::EdgeNotFound("a".into(), "b".into()));
        assert!(!skipped.is_applied());
        assert_eq!(
            skipped.skip().map(ToString::to_string).as_deref(),
            Some("edge (a,b) does not exist")
        );
    }
}
