use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// One generation of the board: a rows × columns buffer of cells stored
/// row-major. The board is a torus, so the top edge touches the bottom
/// edge and the left edge touches the right edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Generation {
    /// Create a new generation with all cells dead
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Dead; rows * columns],
        }
    }

    /// Build a generation where `(row, column)` is alive iff `alive(row, column)`
    pub fn from_fn(rows: usize, columns: usize, mut alive: impl FnMut(usize, usize) -> bool) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (row, column)))
            .map(|(row, column)| Cell::from(alive(row, column)))
            .collect();

        Self { rows, columns, cells }
    }

    /// Grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// True for a grid with no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    const fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        (row < self.rows && column < self.columns).then(|| self.cells[self.index(row, column)])
    }

    /// Set cell at position. Writes outside the grid are ignored.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        if row < self.rows && column < self.columns {
            let idx = self.index(row, column);
            self.cells[idx] = cell;
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Set every cell alive or dead independently with probability 0.5
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(0.5)));
    }

    /// Overwrite this generation with `other`, reusing the allocation
    pub fn copy_from(&mut self, other: &Generation) {
        self.rows = other.rows;
        self.columns = other.columns;
        self.cells.clone_from(&other.cells);
    }

    /// Count live neighbors using toroidal wrapping.
    ///
    /// Coordinates are taken modulo the grid size, so a grid narrower than
    /// three cells visits the same neighbor more than once. An empty grid
    /// has no neighbors.
    pub fn live_neighbors(&self, row: usize, column: usize) -> u8 {
        if self.is_empty() {
            return 0;
        }

        let (row, column) = (row % self.rows, column % self.columns);
        let rows = [
            (row + self.rows - 1) % self.rows,
            row,
            (row + 1) % self.rows,
        ];
        let columns = [
            (column + self.columns - 1) % self.columns,
            column,
            (column + 1) % self.columns,
        ];

        (0..3)
            .flat_map(|dr| (0..3).map(move |dc| (dr, dc)))
            .filter(|&offset| offset != (1, 1))
            .filter(|&(dr, dc)| self.cells[self.index(rows[dr], columns[dc])].is_alive())
            .count() as u8
    }

    /// Reshape `next` to match this generation without touching its contents
    fn shape(&self, next: &mut Generation) {
        next.rows = self.rows;
        next.columns = self.columns;
        next.cells.resize(self.cells.len(), Cell::Dead);
    }

    /// Write the next generation into `next`. `self` is left untouched.
    pub fn step_into(&self, next: &mut Generation) {
        self.shape(next);
        if self.is_empty() {
            return;
        }

        let columns = self.columns;
        next.cells.iter_mut().enumerate().for_each(|(idx, slot)| {
            let (row, column) = (idx / columns, idx % columns);
            *slot = self.cells[idx].evolve(self.live_neighbors(row, column));
        });
    }

    /// Parallel variant of [`Generation::step_into`]: rows are handed out
    /// to the rayon pool. Produces the same result as the serial step.
    pub fn step_into_parallel(&self, next: &mut Generation) {
        self.shape(next);
        if self.is_empty() {
            return;
        }

        next.cells
            .par_chunks_mut(self.columns)
            .enumerate()
            .for_each(|(row, out)| {
                out.iter_mut().enumerate().for_each(|(column, slot)| {
                    let current = self.cells[self.index(row, column)];
                    *slot = current.evolve(self.live_neighbors(row, column));
                });
            });
    }

    /// Pure step - returns the next generation as a new buffer
    pub fn step(&self) -> Self {
        let mut next = Self::new(self.rows, self.columns);
        self.step_into(&mut next);
        next
    }

    /// Parallel step using rayon, for large grids
    pub fn step_parallel(&self) -> Self {
        let mut next = Self::new(self.rows, self.columns);
        self.step_into_parallel(&mut next);
        next
    }

    /// Iterate over all cells with their (row, column) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / columns, idx % columns, cell))
    }
}
