/// Cell is a single square of the board: either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Next state of this cell given its live neighbor count (B3/S23):
    /// 1. Live cell with fewer than 2 neighbors dies
    /// 2. Live cell with 2 or 3 neighbors survives
    /// 3. Live cell with more than 3 neighbors dies
    /// 4. Dead cell with exactly 3 neighbors comes alive
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
