//! Plain text export implementation.
//!
//! Prints the graph in a framed block suitable for console output.

use super::{format_row, ExportData, Exporter};
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// Plain text exporter implementation.
pub struct TextExporter;

fn framed_title(title: &str) -> String {
    let padding = RULE_WIDTH.saturating_sub(title.len());
    let left = padding / 2;
    format!(
        "{}{}{}",
        "-".repeat(left),
        title,
        "-".repeat(padding - left)
    )
}

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", framed_title("Graph"))?;
        writeln!(writer, "Oriented: {}", data.oriented)?;

        writeln!(writer, "Nodes:")?;
        for node in &data.nodes {
            writeln!(writer, "    {}", node)?;
        }

        writeln!(writer, "Edges:")?;
        for (node1, node2) in &data.edges {
            writeln!(writer, "    ({},{})", node1, node2)?;
        }

        writeln!(writer, "Incidence Matrix:")?;
        for row in &data.matrix {
            writeln!(writer, "       {}", format_row(row))?;
        }
        writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;

        if let Some(order) = &data.topological_order {
            writeln!(writer)?;
            writeln!(writer, "{}", framed_title("Topological order"))?;
            for (i, id) in order.iter().enumerate() {
                writeln!(writer, "{:>3}. {}", i + 1, id)?;
            }
            writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
        }

        Ok(())
    }
}
