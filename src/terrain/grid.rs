use crate::core::cell::Cell;
use crate::terrain::Terrain;

/// A rectangular terrain with its top-left cell at the origin.
///
/// Stored as a dense row-major table, so `Cell -> traversable` is O(1). Anything outside
/// `0..rows x 0..cols` is void.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    tiles: Vec<bool>,
}

impl Grid {
    /// An all-void grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::from_fn(rows, cols, |_| false)
    }

    /// A grid where every cell is traversable.
    pub fn filled(rows: i32, cols: i32) -> Self {
        Self::from_fn(rows, cols, |_| true)
    }

    pub fn from_fn(rows: i32, cols: i32, mut f: impl FnMut(Cell) -> bool) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let mut tiles = Vec::with_capacity((rows as usize) * (cols as usize));
        for row in 0..rows {
            for col in 0..cols {
                tiles.push(f(Cell::new(row, col)));
            }
        }
        Self { rows, cols, tiles }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Marks `cell` as tile or void. Returns `false` if the cell is outside the grid.
    pub fn set(&mut self, cell: Cell, traversable: bool) -> bool {
        match self.index_of(cell) {
            Some(idx) => {
                self.tiles[idx] = traversable;
                true
            }
            None => false,
        }
    }

    pub fn traversable_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t).count()
    }

    pub fn traversable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t)
            .map(move |(i, _)| Cell::new(i as i32 / self.cols, i as i32 % self.cols))
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 || cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }
        Some((cell.row as usize) * (self.cols as usize) + cell.col as usize)
    }
}

impl Terrain for Grid {
    #[inline]
    fn is_traversable(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|idx| self.tiles[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_cells_are_void() {
        let g = Grid::filled(2, 3);
        assert!(g.is_traversable(Cell::new(1, 2)));
        assert!(!g.is_traversable(Cell::new(2, 0)));
        assert!(!g.is_traversable(Cell::new(0, -1)));
        assert_eq!(g.traversable_count(), 6);
    }

    #[test]
    fn traversable_cells_are_row_major() {
        let mut g = Grid::new(2, 2);
        g.set(Cell::new(1, 0), true);
        g.set(Cell::new(0, 1), true);
        let cells: Vec<Cell> = g.traversable_cells().collect();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }
}
