//! Incidence matrix representation.
//!
//! Rows correspond to edges and columns to nodes, both in the order of the
//! owning graph's edge and node lists. Each row encodes one edge:
//!
//! | Edge kind | Encoding |
//! |-----------|----------|
//! | self-loop | `2` at the node's column |
//! | oriented | `-1` at the source, `1` at the destination |
//! | unoriented | `1` at both endpoints |

use std::fmt;

/// Encodes a single edge as a matrix row of `width` columns.
///
/// `source` and `target` are column positions and must be `< width`.
///
/// # Example
///
/// ```rust
/// use incidence_graph::graph::encode_row;
///
/// assert_eq!(encode_row(3, 0, 2, true), vec![-1, 0, 1]);
/// assert_eq!(encode_row(3, 0, 2, false), vec![1, 0, 1]);
/// assert_eq!(encode_row(3, 1, 1, true), vec![0, 2, 0]);
/// ```
pub fn encode_row(width: usize, source: usize, target: usize, oriented: bool) -> Vec<i8> {
    let mut row = vec![0; width];
    if source == target {
        row[source] = 2;
    } else if oriented {
        row[source] = -1;
        row[target] = 1;
    } else {
        row[source] = 1;
        row[target] = 1;
    }
    row
}

/// Formats one matrix row as `[a, b, c]` with right-aligned cells.
pub(crate) fn format_row(row: &[i8]) -> String {
    let cells: Vec<String> = row.iter().map(|v| format!("{:>2}", v)).collect();
    format!("[{}]", cells.join(", "))
}

/// An edges-by-nodes incidence matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidenceMatrix {
    rows: Vec<Vec<i8>>,
    columns: usize,
}

impl IncidenceMatrix {
    /// Creates a matrix with no rows and `columns` columns.
    pub fn new(columns: usize) -> Self {
        Self {
            rows: Vec::new(),
            columns,
        }
    }

    /// Builds a matrix from `(source, target)` column positions, one row per
    /// pair, in order.
    pub fn from_positions<I>(columns: usize, edges: I, oriented: bool) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let rows = edges
            .into_iter()
            .map(|(source, target)| encode_row(columns, source, target, oriented))
            .collect();
        Self { rows, columns }
    }

    /// Number of rows (edges).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (nodes).
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Returns the row at `index`.
    pub fn row(&self, index: usize) -> Option<&[i8]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterates over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[i8]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the value at (`row`, `column`).
    pub fn get(&self, row: usize, column: usize) -> Option<i8> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    pub(crate) fn push_column(&mut self) {
        for row in &mut self.rows {
            row.push(0);
        }
        self.columns += 1;
    }

    pub(crate) fn push_row(&mut self, source: usize, target: usize, oriented: bool) {
        self.rows
            .push(encode_row(self.columns, source, target, oriented));
    }

    pub(crate) fn remove_row(&mut self, index: usize) -> Vec<i8> {
        self.rows.remove(index)
    }
}

impl fmt::Display for IncidenceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", format_row(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_self_loop() {
        assert_eq!(encode_row(4, 2, 2, false), vec![0, 0, 2, 0]);
        assert_eq!(encode_row(4, 2, 2, true), vec![0, 0, 2, 0]);
    }

    #[test]
    fn test_encode_oriented_is_directional() {
        assert_eq!(encode_row(3, 2, 0, true), vec![1, 0, -1]);
    }

    #[test]
    fn test_from_positions() {
        let matrix = IncidenceMatrix::from_positions(3, [(0, 1), (1, 2), (2, 2)], false);
        assert_eq!(matrix.row_count(), 3);
        assert_eq!(matrix.column_count(), 3);
        assert_eq!(matrix.row(0), Some(&[1, 1, 0][..]));
        assert_eq!(matrix.row(2), Some(&[0, 0, 2][..]));
        assert_eq!(matrix.get(1, 2), Some(1));
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn test_push_column_extends_every_row() {
        let mut matrix = IncidenceMatrix::from_positions(2, [(0, 1), (1, 0)], true);
        matrix.push_column();
        assert_eq!(matrix.column_count(), 3);
        assert!(matrix.rows().all(|row| row.len() == 3 && row[2] == 0));
    }

    #[test]
    fn test_push_and_remove_row() {
        let mut matrix = IncidenceMatrix::new(2);
        matrix.push_row(0, 1, true);
        matrix.push_row(1, 1, true);
        assert_eq!(matrix.row_count(), 2);

        let removed = matrix.remove_row(0);
        assert_eq!(removed, vec![-1, 1]);
        assert_eq!(matrix.row(0), Some(&[0, 2][..]));
    }

    #[test]
    fn test_format_row() {
        assert_eq!(format_row(&[-1, 0, 2]), "[-1,  0,  2]");
        assert_eq!(format_row(&[]), "[]");
    }

    #[test]
    fn test_display() {
        let matrix = IncidenceMatrix::from_positions(2, [(0, 1)], true);
        assert_eq!(matrix.to_string(), "[-1,  1]\n");
    }
}
