use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use log::debug;
use thiserror::Error;

use crate::render;

/// The classic glider, as (row, col) cells near the grid origin.
pub const GLIDER: [(usize, usize); 5] = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("Invalid input. Please enter coordinates as 'row,col'.")]
    Malformed,
    #[error("Coordinates out of bounds for a {rows}x{cols} grid. Try again.")]
    OutOfBounds { rows: usize, cols: usize },
}

/// An all-dead grid with the glider placed at its fixed offsets.
pub fn glider(rows: usize, cols: usize) -> Vec<Vec<bool>> {
    debug_assert!(rows >= 5 && cols >= 5);
    let mut cells = vec![vec![false; cols]; rows];
    for &(r, c) in GLIDER.iter() {
        cells[r][c] = true;
    }
    cells
}

/// Accumulates live cells from `row,col` lines until `done` (or EOF).
///
/// Malformed and out-of-range entries are reported and the prompt repeats;
/// bad input never aborts seeding. A preview of the grid is redrawn after
/// every accepted cell.
pub fn interactive<R, W>(input: &mut R, out: &mut W, rows: usize, cols: usize) -> io::Result<Vec<Vec<bool>>>
where
    R: BufRead,
    W: Write,
{
    let mut cells = vec![vec![false; cols]; rows];

    writeln!(out, "{}", "Create your initial configuration!".yellow())?;
    writeln!(out, "Enter cell coordinates as 'row,col' (e.g. '2,3'). Type 'done' to finish.")?;
    write!(out, "{}", render::frame(&cells))?;

    let mut line = String::new();
    loop {
        write!(out, "Enter coordinates (or 'done'): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF ends seeding the same way 'done' does.
            break;
        }
        let entry = line.trim();
        if entry.eq_ignore_ascii_case("done") {
            break;
        }

        match parse_coord(entry) {
            Ok((r, c)) if r < rows && c < cols => {
                cells[r][c] = true;
                debug!("seeded cell ({r},{c})");
                render::clear(out)?;
                write!(out, "{}", render::frame(&cells))?;
            }
            Ok((r, c)) => {
                debug!("rejected out-of-range cell ({r},{c})");
                let err = SeedError::OutOfBounds { rows, cols };
                writeln!(out, "{}", err.to_string().red())?;
            }
            Err(err) => {
                debug!("rejected entry {entry:?}");
                writeln!(out, "{}", err.to_string().red())?;
            }
        }
    }

    Ok(cells)
}

fn parse_coord(entry: &str) -> Result<(usize, usize), SeedError> {
    let (row, col) = entry.split_once(',').ok_or(SeedError::Malformed)?;
    let row = row.trim().parse().map_err(|_| SeedError::Malformed)?;
    let col = col.trim().parse().map_err(|_| SeedError::Malformed)?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str, rows: usize, cols: usize) -> (Vec<Vec<bool>>, String) {
        let mut input = Cursor::new(script.to_owned());
        let mut out = Vec::new();
        let cells = interactive(&mut input, &mut out, rows, cols).unwrap();
        (cells, String::from_utf8(out).unwrap())
    }

    #[test]
    fn glider_places_the_five_cells() {
        let cells = glider(20, 20);
        let live: Vec<(usize, usize)> = cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &a)| a)
                    .map(move |(c, _)| (r, c))
            })
            .collect();
        assert_eq!(live, GLIDER.to_vec());
    }

    #[test]
    fn parse_accepts_plain_and_padded_coordinates() {
        assert_eq!(parse_coord("2,3"), Ok((2, 3)));
        assert_eq!(parse_coord(" 10 , 0 "), Ok((10, 0)));
    }

    #[test]
    fn parse_rejects_malformed_entries() {
        for bad in ["", "2", "2;3", "a,b", "-1,2", "1,2,3"] {
            assert_eq!(parse_coord(bad), Err(SeedError::Malformed), "{bad:?}");
        }
    }

    #[test]
    fn accepted_cells_end_up_alive() {
        let (cells, _) = run("1,2\n3,0\ndone\n", 5, 5);
        assert!(cells[1][2]);
        assert!(cells[3][0]);
        assert_eq!(cells.iter().flatten().filter(|&&a| a).count(), 2);
    }

    #[test]
    fn done_is_case_insensitive() {
        let (cells, _) = run("DONE\n", 4, 4);
        assert!(cells.iter().flatten().all(|&a| !a));
    }

    #[test]
    fn eof_ends_seeding() {
        let (cells, _) = run("0,0\n", 4, 4);
        assert!(cells[0][0]);
    }

    #[test]
    fn out_of_range_entry_reports_and_reprompts() {
        let (cells, out) = run("7,1\n1,1\ndone\n", 5, 5);
        assert!(cells[1][1]);
        assert!(out.contains("out of bounds"));
        assert!(out.matches("Enter coordinates (or 'done'):").count() >= 3);
    }

    #[test]
    fn malformed_entry_reports_and_reprompts() {
        let (cells, out) = run("banana\n2,2\ndone\n", 5, 5);
        assert!(cells[2][2]);
        assert!(out.contains("Invalid input"));
    }
}
