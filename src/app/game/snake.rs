use std::collections::VecDeque;

use crate::basic::{Cell, Dir, Grid};

/// The snake's body, head first, never empty
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    pub fn new(head: Cell) -> Self {
        Self { body: VecDeque::from([head]) }
    }

    /// Build a snake from its cells, head first
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        let body: VecDeque<_> = cells.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one cell");
        Self { body }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Add a segment one step behind the tail, opposite to the direction
    /// of movement. The new segment is not wrapped, the next
    /// [`Snake::advance`] moves it onto the old tail's cell.
    pub fn grow_behind(&mut self, dir: Dir) {
        let new_tail = self.tail().step(-dir);
        self.body.push_back(new_tail);
    }

    /// Every segment takes its predecessor's cell and the head moves
    /// one cell in `dir`, wrapping around the grid
    pub fn advance(&mut self, dir: Dir, grid: &Grid) {
        let head = grid.wrap(self.head().step(dir));
        self.body.push_front(head);
        self.body.pop_back();
    }
}
