// File: src/debug.rs
//! Side-by-side view of dialect source and its translation.

use crossterm::style::Stylize;
use std::io::{self, Write};

const WIDTH: usize = 100;
const LEFT: usize = 45;
const RIGHT: usize = 50;

/// Writes both texts as two columns, one source line per row.
///
/// With `styled`, headers are bold and rows that changed are highlighted.
pub fn render_side_by_side<W: Write>(
    out: &mut W,
    dialect: &str,
    host: &str,
    styled: bool,
) -> io::Result<()> {
    let left: Vec<&str> = dialect.split('\n').collect();
    let right: Vec<&str> = host.split('\n').collect();
    let rule = "=".repeat(WIDTH);

    writeln!(out, "{rule}")?;
    if styled {
        writeln!(out, "{}", "TRANSLATION DEBUG VIEW".bold())?;
    } else {
        writeln!(out, "TRANSLATION DEBUG VIEW")?;
    }
    writeln!(out, "{rule}")?;

    let header = format!("{:<LEFT$} | {:<RIGHT$}", "PT-BR", "Python");
    if styled {
        writeln!(out, "{}", header.bold())?;
    } else {
        writeln!(out, "{header}")?;
    }
    writeln!(out, "{}", "-".repeat(WIDTH))?;

    for row in 0..left.len().max(right.len()) {
        let l = left.get(row).copied().unwrap_or("");
        let r = right.get(row).copied().unwrap_or("");
        let l_cell = format!("{:<LEFT$}", clip(l, LEFT));
        let r_cell = format!("{:<RIGHT$}", clip(r, RIGHT));

        if styled && l != r {
            writeln!(out, "{} | {}", l_cell.yellow(), r_cell.green())?;
        } else {
            writeln!(out, "{l_cell} | {r_cell}")?;
        }
    }

    writeln!(out, "{rule}")?;
    out.flush()
}

/// Cuts lines longer than `width` characters, marking the cut with `...`.
fn clip(line: &str, width: usize) -> String {
    if line.chars().count() > width {
        let mut cut: String = line.chars().take(width - 3).collect();
        cut.push_str("...");
        cut
    } else {
        line.to_string()
    }
}
