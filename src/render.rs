use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};

use crate::engine::{Boundary, Engine};

/// Clears the display and homes the cursor.
pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Renders the grid body: borders, row labels, colored glyphs, column labels.
pub fn frame(cells: &[Vec<bool>]) -> String {
    let cols = cells.first().map_or(0, Vec::len);
    let border = "━".repeat(cols * 2 + 1);
    let mut s = String::new();

    s.push_str(&format!("   {border}\n"));
    for (i, row) in cells.iter().enumerate() {
        s.push_str(&format!("{i:2}  │ "));
        for &alive in row {
            if alive {
                s.push_str(&format!("{} ", "⬛".green()));
            } else {
                s.push_str(&format!("{} ", "⬜".dark_grey()));
            }
        }
        s.push_str("│\n");
    }
    s.push_str(&format!("   {border}\n"));

    s.push_str("    ");
    let labels: Vec<String> = (0..cols).map(|i| format!("{i:2}")).collect();
    s.push_str(&labels.join(" "));
    s.push('\n');
    s
}

/// Draws one full display refresh: clear, generation header, grid.
pub fn draw<W: Write>(out: &mut W, engine: &Engine) -> io::Result<()> {
    let mode = match engine.boundary() {
        Boundary::Toroidal => "Toroidal Space",
        Boundary::Clamped => "Bounded Grid",
    };

    clear(out)?;
    writeln!(out, "Game of Life ({mode}) - Generation {}", engine.generation())?;
    write!(out, "{}", frame(engine.cells()))?;
    out.flush()
}
