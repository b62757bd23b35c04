//! Human-readable rendering of graphs.
//!
//! This module provides exporters that print a graph's node list, edge list
//! and incidence matrix for diagnostics: plain text and Markdown.

pub mod markdown;
pub mod text;

use crate::graph::Graph;
pub(crate) use crate::graph::format_row;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text - console output
    #[default]
    Text,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
///
/// A snapshot of a graph and of its classifications whose answers do not
/// vary between calls. `regular` draws a random reference node, but every
/// draw gives the same answer.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Whether the graph is oriented
    pub oriented: bool,
    /// Node ids in insertion order
    pub nodes: Vec<String>,
    /// Edge endpoints in insertion order
    pub edges: Vec<(String, String)>,
    /// Incidence matrix rows, one per edge
    pub matrix: Vec<Vec<i8>>,
    /// Whether every node can reach every other node
    pub strongly_connected: bool,
    /// Whether every node is adjacent to every other node
    pub complete: bool,
    /// Whether every node has the same degree
    pub regular: bool,
    /// Topological order, when one was computed
    pub topological_order: Option<Vec<String>>,
}

impl ExportData {
    /// Create new export data from a graph.
    pub fn new(graph: &Graph) -> Self {
        Self {
            oriented: graph.is_oriented(),
            nodes: graph.nodes().iter().map(|n| n.id().to_string()).collect(),
            edges: graph
                .edges()
                .iter()
                .map(|e| (e.node1().to_string(), e.node2().to_string()))
                .collect(),
            matrix: graph.matrix().rows().map(<[i8]>::to_vec).collect(),
            strongly_connected: graph.is_strongly_connected(),
            complete: graph.is_complete(),
            regular: graph.is_regular(),
            topological_order: None,
        }
    }

    /// Attach a topological order to the export.
    pub fn with_topological_order(mut self, order: Vec<String>) -> Self {
        self.topological_order = Some(order);
        self
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
