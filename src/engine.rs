/// How neighbor lookups behave at the grid edges.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Boundary {
    /// Coordinates wrap modulo the grid dimensions; opposite edges are adjacent.
    Toroidal,
    /// Cells beyond the edge do not exist and never count.
    Clamped,
}

/// Owns the grid and evolves it one generation at a time.
///
/// Dimensions and boundary policy are fixed at construction. Each `step`
/// computes the next generation into a fresh buffer from the current one,
/// so no cell's new state can leak into another cell's neighbor count.
#[derive(Clone)]
pub struct Engine {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<bool>>,
    boundary: Boundary,
    generation: u64,
}

impl Engine {
    /// An all-dead grid of the given dimensions.
    #[inline]
    pub fn new(rows: usize, cols: usize, boundary: Boundary) -> Self {
        Self::from_cells(vec![vec![false; cols]; rows], boundary)
    }

    /// Wraps an existing cell matrix. Panics if the matrix is empty or ragged.
    pub fn from_cells(cells: Vec<Vec<bool>>, boundary: Boundary) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);

        if rows == 0 || cols == 0 {
            panic!("Grid must have at least one row and one column!");
        }
        if !cells.iter().all(|r| r.len() == cols) {
            panic!("All rows of the matrix should be same size!");
        }

        Engine {
            rows,
            cols,
            cells,
            boundary,
            generation: 0,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Live cells among the 8 Moore neighbors of (row, col).
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = row as isize + dr;
                let c = col as isize + dc;
                let alive = match self.boundary {
                    Boundary::Toroidal => {
                        let r = r.rem_euclid(self.rows as isize) as usize;
                        let c = c.rem_euclid(self.cols as isize) as usize;
                        self.cells[r][c]
                    }
                    Boundary::Clamped => {
                        if r < 0 || c < 0 || r >= self.rows as isize || c >= self.cols as isize {
                            false
                        } else {
                            self.cells[r as usize][c as usize]
                        }
                    }
                };
                if alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances the grid one generation under B3/S23.
    pub fn step(&mut self) {
        let mut next = vec![vec![false; self.cols]; self.rows];

        for r in 0..self.rows {
            for c in 0..self.cols {
                next[r][c] = match (self.cells[r][c], self.neighbor_count(r, c)) {
                    (true, 2) | (true, 3) => true,
                    (false, 3) => true,
                    _ => false,
                };
            }
        }

        self.cells = next;
        self.generation += 1;
    }
}
