//! Markdown export implementation.
//!
//! Exports a graph in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Graph Report")?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Property | Value |")?;
        writeln!(writer, "|----------|-------|")?;
        writeln!(writer, "| Oriented | {} |", yes_no(data.oriented))?;
        writeln!(writer, "| Order | {} |", data.nodes.len())?;
        writeln!(writer, "| Edges | {} |", data.edges.len())?;
        writeln!(
            writer,
            "| Strongly Connected | {} |",
            yes_no(data.strongly_connected)
        )?;
        writeln!(writer, "| Complete | {} |", yes_no(data.complete))?;
        writeln!(writer, "| Regular | {} |", yes_no(data.regular))?;
        writeln!(writer)?;

        // Edges
        writeln!(writer, "## Edges")?;
        writeln!(writer)?;
        if data.edges.is_empty() {
            writeln!(writer, "*No edges.*")?;
        } else {
            let (left, right) = if data.oriented {
                ("Source", "Destination")
            } else {
                ("Node 1", "Node 2")
            };
            writeln!(writer, "| # | {} | {} |", left, right)?;
            writeln!(writer, "|---|---|---|")?;
            for (i, (node1, node2)) in data.edges.iter().enumerate() {
                writeln!(writer, "| {} | {} | {} |", i, node1, node2)?;
            }
        }
        writeln!(writer)?;

        // Incidence matrix, one column per node
        writeln!(writer, "## Incidence Matrix")?;
        writeln!(writer)?;
        writeln!(writer, "| Edge | {} |", data.nodes.join(" | "))?;
        writeln!(writer, "|------|{}", "---|".repeat(data.nodes.len()))?;
        for ((node1, node2), row) in data.edges.iter().zip(&data.matrix) {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(writer, "| ({},{}) | {} |", node1, node2, cells.join(" | "))?;
        }
        writeln!(writer)?;

        if let Some(order) = &data.topological_order {
            writeln!(writer, "## Topological Order")?;
            writeln!(writer)?;
            for (i, id) in order.iter().enumerate() {
                writeln!(writer, "{}. {}", i + 1, id)?;
            }
            writeln!(writer)?;
        }

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer)?;
        writeln!(writer, "*Generated by incidence-graph*")?;

        Ok(())
    }
}
