//! Human-readable dumps of both graph types.
//!
//! These are thin formatters over the public accessors.

use core::fmt::{self, Display, Write as _};
use std::hash::Hash;

use num_traits::PrimInt;

use crate::graph::{LabeledGraph, WeightedDigraph};

/// Joined bodies shorter than this are printed on one line.
const SINGLE_LINE_LIMIT: usize = 70;

impl<W: PrimInt + Display> Display for WeightedDigraph<W> {
    /// Prints the adjacency matrix with row and column headers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count();
        if n == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({n} vertices):")?;
        write!(f, "   |")?;
        write_padded_row(f, 0..n)?;
        writeln!(f, "{}", "-".repeat(n * 3 + 3))?;
        for (i, row) in self.matrix().rows().enumerate() {
            write!(f, "{i:>2} |")?;
            write_padded_row(f, row)?;
        }
        Ok(())
    }
}

fn write_padded_row<T, I>(f: &mut fmt::Formatter<'_>, cells: I) -> fmt::Result
where
    T: Display,
    I: IntoIterator<Item = T>,
{
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{cell:>2}")?;
    }
    f.write_char('\n')
}

impl<L> Display for LabeledGraph<L>
where
    L: Clone + Eq + Hash + Ord + Display,
{
    /// Prints `GRAPH: {v: [n1, n2], ...}`, one vertex per line when long.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::with_capacity(self.vertex_count());
        for vertex in self.vertices() {
            let mut line = format!("{vertex}: [");
            for (i, nbr) in self.neighbors(&vertex).unwrap_or(&[]).iter().enumerate() {
                if i > 0 {
                    line.push_str(", ");
                }
                write!(line, "{nbr}")?;
            }
            line.push(']');
            lines.push(line);
        }

        let body = lines.join("\n  ");
        if body.chars().count() < SINGLE_LINE_LIMIT {
            write!(f, "GRAPH: {{{}}}", lines.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {body}}}")
        }
    }
}
